//! # Actions
//!
//! Everything that can happen in Dictum becomes an `Action`.
//! User edits the quote field? That's `Action::QuoteChanged(text)`.
//! User presses Enter? That's `Action::Submit`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the caller what happened.
//! No I/O here. Terminal work happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions in, assert on the state.
//! And debuggable: log every action, replay the exact session.

use crate::core::form::{capitalize_first, capitalize_words, validate_author, validate_quote};
use crate::core::form::{AUTHOR_REQUIRED, QUOTE_REQUIRED};
use crate::core::quote::QuoteRecord;
use crate::core::state::App;

/// Every state change in the app, in one enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The quote field's full text after an edit.
    QuoteChanged(String),
    /// The author field's full text after an edit.
    AuthorChanged(String),
    /// Attempt to commit the current form contents.
    Submit,
    /// Leave the application.
    Quit,
}

/// What `update()` wants the caller to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the state change itself.
    None,
    /// A submission was accepted: a record was appended and the form reset.
    Committed,
    /// The user asked to exit.
    Quit,
}

/// Apply `action` to `app`. The single place state mutates.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QuoteChanged(text) => {
            app.form.quote_error = validate_quote(&text);
            app.form.quote_text = text;
            Effect::None
        }
        Action::AuthorChanged(text) => {
            app.form.author_error = validate_author(&text);
            app.form.author_text = text;
            Effect::None
        }
        Action::Submit => submit(app),
        Action::Quit => Effect::Quit,
    }
}

/// Gate, transform, commit. Runs on Enter.
///
/// Both fields must be non-empty after trimming AND free of validation
/// errors. On success the trimmed quote gets its first letter uppercased,
/// the trimmed author is title-cased, the record is appended, and the form
/// resets. On failure only the required-field messages may be (re)set, and
/// only on exact-empty text: whitespace-only input keeps whatever message
/// live validation already put there.
fn submit(app: &mut App) -> Effect {
    let final_quote = capitalize_first(app.form.quote_text.trim());
    let final_author = capitalize_words(app.form.author_text.trim());

    let acceptable = !final_quote.is_empty()
        && !final_author.is_empty()
        && app.form.quote_error.is_empty()
        && app.form.author_error.is_empty();

    if acceptable {
        app.book.append(QuoteRecord {
            quote: final_quote,
            author: final_author,
        });
        app.form.clear();
        app.status_message = String::from("Quote added");
        return Effect::Committed;
    }

    // Exact-empty check on the raw text, not the trimmed text.
    if app.form.quote_text.is_empty() {
        app.form.quote_error = QUOTE_REQUIRED.to_string();
    }
    if app.form.author_text.is_empty() {
        app.form.author_error = AUTHOR_REQUIRED.to_string();
    }
    Effect::None
}
