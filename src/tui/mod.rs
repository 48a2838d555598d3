//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws when an event arrived: typing, scrolling,
//! resizing. Nothing animates, so idle polling sleeps up to 250ms per
//! iteration at zero render cost.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::str::FromStr;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::style::Color;

use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, FieldInput, QuoteListState};
use crate::tui::event::{poll_event, poll_event_immediate, TuiEvent};

/// Which entry field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Quote,
    Author,
}

impl FocusedField {
    /// The other field. Two fields make next and previous the same move.
    fn toggled(self) -> Self {
        match self {
            FocusedField::Quote => FocusedField::Author,
            FocusedField::Author => FocusedField::Quote,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub quote_input: FieldInput,
    pub author_input: FieldInput,
    pub quote_list: QuoteListState,
    // Which field the keyboard edits
    pub focus: FocusedField,
    // Resolved UI options
    pub show_hints: bool,
    pub accent: Color,
}

impl TuiState {
    pub fn new(accent: Color, show_hints: bool) -> Self {
        Self {
            quote_input: FieldInput::new("Quote", "Write here the quote", accent),
            author_input: FieldInput::new("Author", "Write here the author", accent),
            quote_list: QuoteListState::new(),
            focus: FocusedField::Quote, // User expects to type immediately
            show_hints,
            accent,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Parse a configured accent color name, falling back to cyan.
fn parse_accent(name: &str) -> Color {
    match Color::from_str(name) {
        Ok(color) => color,
        Err(_) => {
            warn!("Unrecognized accent color {:?}, using cyan", name);
            Color::Cyan
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let accent = parse_accent(&config.accent);
    let mut app = App::new();
    let mut tui = TuiState::new(accent, config.show_hints);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync field props with App state
        tui.quote_input.focused = tui.focus == FocusedField::Quote;
        tui.author_input.focused = tui.focus == FocusedField::Author;
        tui.quote_input.invalid = !app.form.quote_error.is_empty();
        tui.author_input.invalid = !app.form.author_error.is_empty();

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            match event {
                TuiEvent::ForceQuit | TuiEvent::Quit => {
                    debug!("Dispatching Action::Quit");
                    let effect = update(&mut app, Action::Quit);
                    if effect == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::NextField | TuiEvent::PrevField => {
                    tui.focus = tui.focus.toggled();
                }
                TuiEvent::Submit => {
                    debug!("Dispatching Action::Submit");
                    let effect = update(&mut app, Action::Submit);
                    if effect == Effect::Committed {
                        // The form reset on commit; mirror it in the editors
                        // and jump focus back to the quote field.
                        tui.quote_input.clear();
                        tui.author_input.clear();
                        tui.focus = FocusedField::Quote;
                        tui.quote_list.follow_bottom();
                        info!("Quote committed (total: {})", app.book.len());
                    } else {
                        debug!("Submission rejected, field errors remain on screen");
                    }
                }
                // Scroll events always go to the quote list
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.quote_list.handle_event(&event);
                }
                // Everything else edits the focused field
                _ => {
                    let field_event = match tui.focus {
                        FocusedField::Quote => tui.quote_input.handle_event(&event),
                        FocusedField::Author => tui.author_input.handle_event(&event),
                    };
                    if let Some(FieldEvent::Changed(text)) = field_event {
                        let action = match tui.focus {
                            FocusedField::Quote => Action::QuoteChanged(text),
                            FocusedField::Author => Action::AuthorChanged(text),
                        };
                        debug!("Dispatching {:?}", action);
                        update(&mut app, action);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_toggles_between_fields() {
        assert_eq!(FocusedField::Quote.toggled(), FocusedField::Author);
        assert_eq!(FocusedField::Author.toggled(), FocusedField::Quote);
    }

    #[test]
    fn test_parse_accent_known_color() {
        assert_eq!(parse_accent("magenta"), Color::Magenta);
        assert_eq!(parse_accent("#ff8800"), Color::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_accent_unknown_falls_back_to_cyan() {
        assert_eq!(parse_accent("not-a-color"), Color::Cyan);
    }

    #[test]
    fn test_tui_state_starts_on_quote_field() {
        let tui = TuiState::new(Color::Cyan, true);
        assert_eq!(tui.focus, FocusedField::Quote);
        assert!(tui.quote_list.stick_to_bottom);
    }
}
