//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::style::Color;

use crate::core::action::{update, Action};
use crate::core::state::App;
use crate::tui::TuiState;

/// Creates a fresh App (seeded quote book, empty form).
pub fn test_app() -> App {
    App::new()
}

/// Creates a TuiState with the default accent and hints enabled.
pub fn test_tui() -> TuiState {
    TuiState::new(Color::Cyan, true)
}

/// Simulates typing into the quote field one character at a time.
///
/// The field editor emits a full-buffer snapshot on every keystroke, so
/// validation runs against each intermediate prefix just like it does live.
pub fn type_quote(app: &mut App, text: &str) {
    let mut buffer = String::new();
    for ch in text.chars() {
        buffer.push(ch);
        update(app, Action::QuoteChanged(buffer.clone()));
    }
}

/// Simulates typing into the author field one character at a time.
pub fn type_author(app: &mut App, text: &str) {
    let mut buffer = String::new();
    for ch in text.chars() {
        buffer.push(ch);
        update(app, Action::AuthorChanged(buffer.clone()));
    }
}
