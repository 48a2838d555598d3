//! # Application State
//!
//! Core business state for Dictum. This module contains domain logic only -
//! no TUI-specific types. Presentation state (focus, cursors, scroll
//! offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── book: QuoteBook           // accepted quotes, oldest first
//! ├── form: FormState           // raw field text + validation messages
//! └── status_message: String    // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::form::FormState;
use crate::core::quote::QuoteBook;

pub struct App {
    pub book: QuoteBook,
    pub form: FormState,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            book: QuoteBook::seeded(),
            form: FormState::default(),
            status_message: String::from("Welcome to Dictum!"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Dictum!");
        assert_eq!(app.book.len(), 1);
        assert!(app.form.quote_text.is_empty());
        assert!(app.form.quote_error.is_empty());
        assert!(app.form.author_text.is_empty());
        assert!(app.form.author_error.is_empty());
    }
}
