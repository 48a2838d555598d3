//! # TitleBar Component
//!
//! Top status bar showing the app name, quote count, and notifications.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has
//! no internal state. This makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     quote_count: 3,
//!     status_message: "Quote added".to_string(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Rather than passing props as render() parameters, we store them as
//! struct fields. This is necessary for trait-based polymorphism—the
//! Component trait requires a fixed render() signature.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Dictum (quotes: 3) | Quote added"`
//! 2. **Default**: `"Dictum (quotes: 3)"`

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

/// Top status bar component.
///
/// # Props
///
/// - `quote_count`: How many quotes the book currently holds
/// - `status_message`: Transient status (e.g., "Quote added")
pub struct TitleBar {
    pub quote_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(quote_count: usize, status_message: String) -> Self {
        Self {
            quote_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    ///
    /// A plain Span rather than a Block: the bar is always 1 line, needs
    /// no borders, and stays simple to test.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Dictum (quotes: {})", self.quote_count)
        } else {
            format!("Dictum (quotes: {}) | {}", self.quote_count, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
