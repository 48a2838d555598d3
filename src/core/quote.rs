//! # Quote Records
//!
//! The data side of the app: a single accepted quote/author pair and the
//! append-only collection that accumulates them for the session.
//!
//! Records are created in exactly one place (a successful submission in
//! `update()`) and are never edited or removed afterwards. Nothing here is
//! persisted; the collection lives and dies with the process.

/// The example entry every session starts with. Stored verbatim: it is not
/// run through validation or capitalization (note the trailing period, which
/// the quote pattern would reject if a user typed it).
pub const SEED_QUOTE: &str = "My biggest fear is that people will attribute fake quotes to me and millions of morons on the internet will believe it.";

/// Attribution for the seed entry.
pub const SEED_AUTHOR: &str = "Albert Einstein";

/// One accepted quote/author pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub quote: String,
    pub author: String,
}

/// Ordered, append-only collection of accepted quotes.
///
/// The backing vector is private so the only way in is [`QuoteBook::append`];
/// there is no API for mutation or removal. A record is committed once and
/// displayed until process exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBook {
    records: Vec<QuoteRecord>,
}

impl QuoteBook {
    /// A book holding only the seed entry.
    pub fn seeded() -> Self {
        Self {
            records: vec![QuoteRecord {
                quote: SEED_QUOTE.to_string(),
                author: SEED_AUTHOR.to_string(),
            }],
        }
    }

    /// Append a record, preserving insertion order.
    pub fn append(&mut self, record: QuoteRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::seeded()
    }
}
