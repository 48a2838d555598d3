use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::core::quote::QuoteRecord;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one accepted quote with its attribution.
///
/// # Design
///
/// `QuoteCard` is a **transient component**: created fresh each frame for
/// each record the list wants to draw. It holds no mutable state.
///
/// The quote text renders italic and wraps; the attribution renders on its
/// own bottom row as `— Author`.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping.
/// The parent `QuoteList` uses this to size the scroll content without
/// rendering anything.
#[derive(Clone, Copy)]
pub struct QuoteCard<'a> {
    pub record: &'a QuoteRecord,
}

impl<'a> QuoteCard<'a> {
    pub fn new(record: &'a QuoteRecord) -> Self {
        Self { record }
    }

    /// Calculate the height required for this card given a width.
    ///
    /// The wrapping options must match the `Ratatui` default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(record: &QuoteRecord, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            // Return 1 row so the card still occupies space in the layout.
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let quote_lines = (textwrap::wrap(&record.quote, options).len() as u16).max(1);
        // One extra row for the attribution line.
        quote_lines + 1 + VERTICAL_OVERHEAD
    }
}

// Implement Widget for easy usage in ScrollView
impl<'a> Widget for QuoteCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().add_modifier(Modifier::DIM))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let [quote_area, author_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

        let quote = Paragraph::new(self.record.quote.as_str())
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true });
        quote.render(quote_area, buf);

        let author = Line::from(vec![
            Span::styled("— ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(self.record.author.as_str()),
        ]);
        Paragraph::new(author).render(author_area, buf);
    }
}

/// Component trait implementation.
///
/// `QuoteCard` is stateless, so the `&mut self` required by the trait is a
/// no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for QuoteCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_record(quote: &str, author: &str) -> QuoteRecord {
        QuoteRecord {
            quote: quote.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn calculate_height_single_line_quote() {
        let record = make_record("Hello", "Someone");
        // "Hello" fits in width 80 - HORIZONTAL_OVERHEAD = 76:
        // 1 quote line + 1 author line + borders
        assert_eq!(
            QuoteCard::calculate_height(&record, 80),
            1 + 1 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let record = make_record("Hello world", "Someone");
        // "Hello world" = 11 chars, width 9 → content_width = 5
        // Wraps to: "Hello" | "world" = 2 lines, + author + borders
        assert_eq!(
            QuoteCard::calculate_height(&record, 9),
            2 + 1 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_breaks_long_words() {
        let record = make_record("abcdefghij", "Someone");
        // 10 chars, width 8 → content_width = 4 → "abcd" | "efgh" | "ij"
        assert_eq!(
            QuoteCard::calculate_height(&record, 8),
            3 + 1 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let record = make_record("Hello world", "Someone");
        assert_eq!(QuoteCard::calculate_height(&record, 0), 1);
    }

    #[test]
    fn calculate_height_width_equals_overhead_returns_minimum() {
        let record = make_record("Hello world", "Someone");
        assert_eq!(QuoteCard::calculate_height(&record, HORIZONTAL_OVERHEAD), 1);
    }

    #[test]
    fn render_shows_quote_and_attribution() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let record = make_record("Know thyself", "Socrates");
        let mut card = QuoteCard::new(&record);

        terminal.draw(|f| Component::render(&mut card, f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Know thyself"));
        assert!(text.contains("Socrates"));
        assert!(text.contains("—"));
    }
}
