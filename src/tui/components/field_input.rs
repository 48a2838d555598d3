//! # FieldInput Component
//!
//! A single-line bordered text field with placeholder text, horizontal
//! scrolling, and a validity tint on the border.
//!
//! ## Responsibilities
//!
//! - Capture text input for one field (quote or author)
//! - Handle editing (backspace, delete, cursor movement, Ctrl+U, paste)
//! - Report every buffer change upward so validation can run on it
//!
//! ## State Management
//!
//! The buffer, cursor, and scroll window are internal state. Focus and
//! validity are props pushed in by the main loop before each draw: the
//! loop owns the form state, this component only mirrors it.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to content (border + padding)
const CONTENT_OFFSET: u16 = 2;
/// One content row plus top and bottom borders
pub const FIELD_HEIGHT: u16 = 3;

/// High-level events emitted by a FieldInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The buffer changed; carries the full new text.
    Changed(String),
}

/// Single-line text input.
///
/// # Props
///
/// - `focused`: whether this field receives the terminal cursor
/// - `invalid`: whether the field currently fails validation (red border)
///
/// # State
///
/// - `buffer`: the text as typed, byte-for-byte
/// - `cursor`: byte offset into `buffer`
/// - `scroll`: display column of the left edge of the visible window
pub struct FieldInput {
    pub buffer: String,
    pub focused: bool,
    pub invalid: bool,
    label: &'static str,
    placeholder: &'static str,
    accent: Color,
    cursor: usize,
    scroll: u16,
}

impl FieldInput {
    pub fn new(label: &'static str, placeholder: &'static str, accent: Color) -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            invalid: false,
            label,
            placeholder,
            accent,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Empty the field, as after a successful submission.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Display column of the cursor, in buffer coordinates.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Slide the scroll window so the cursor stays visible, and shrink it
    /// back when text no longer fills the width.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col - inner_width + 1;
        }
        // The +1 keeps one blank cell for the cursor after the last char.
        let total = self.buffer.as_str().width() as u16;
        let max_scroll = (total + 1).saturating_sub(inner_width);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }
    }

    /// The slice of the buffer inside the scroll window.
    ///
    /// A double-width character straddling either window edge can't render
    /// half a glyph, so its covered cells become spaces.
    fn visible_text(&self, inner_width: u16) -> String {
        let start = self.scroll as usize;
        let end = start + inner_width as usize;
        let mut out = String::new();
        let mut col = 0usize;
        for c in self.buffer.chars() {
            let char_start = col;
            let char_end = col + c.width().unwrap_or(0);
            col = char_end;
            if char_end <= start {
                continue;
            }
            if char_start >= end {
                break;
            }
            if char_start < start || char_end > end {
                for _ in char_start.max(start)..char_end.min(end) {
                    out.push(' ');
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn border_style(&self) -> Style {
        if self.invalid {
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}

impl Component for FieldInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .padding(Padding::horizontal(1))
            .title(self.label);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_text(inner_width))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let x = area.x + CONTENT_OFFSET + self.cursor_col().saturating_sub(self.scroll);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for FieldInput {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if c.is_control() {
                    return None;
                }
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                let flat = flatten_newlines(text);
                if flat.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::ClearField => {
                if self.buffer.is_empty() {
                    None
                } else {
                    self.clear();
                    Some(FieldEvent::Changed(String::new()))
                }
            }
            // Cursor motion changes no text, so nothing is emitted.
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

/// Collapse every run of CR/LF characters into a single space so pasted
/// multi-line text stays a single line.
fn flatten_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\r' || c == '\n' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn field() -> FieldInput {
        FieldInput::new("Quote", "Write here the quote", Color::Cyan)
    }

    fn type_str(input: &mut FieldInput, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_field_input_new() {
        let input = field();
        assert!(input.buffer.is_empty());
        assert!(!input.focused);
        assert!(!input.invalid);
    }

    #[test]
    fn test_typing_emits_full_text() {
        let mut input = field();
        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(FieldEvent::Changed("a".to_string())));
        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(FieldEvent::Changed("ab".to_string())));
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut input = field();
        assert_eq!(input.handle_event(&TuiEvent::InputChar('\n')), None);
        assert_eq!(input.handle_event(&TuiEvent::InputChar('\u{7}')), None);
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_backspace_respects_char_boundaries() {
        let mut input = field();
        type_str(&mut input, "café");
        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(FieldEvent::Changed("caf".to_string())));
        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(FieldEvent::Changed("ca".to_string())));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = field();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut input = field();
        type_str(&mut input, "a🔥b");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        let res = input.handle_event(&TuiEvent::Delete);
        assert_eq!(res, Some(FieldEvent::Changed("ab".to_string())));
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = field();
        type_str(&mut input, "ab");
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut input = field();
        type_str(&mut input, "ac");
        input.handle_event(&TuiEvent::CursorLeft);
        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(FieldEvent::Changed("abc".to_string())));
    }

    #[test]
    fn test_cursor_moves_emit_nothing() {
        let mut input = field();
        type_str(&mut input, "abc");
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
        assert_eq!(input.buffer, "abc");
    }

    #[test]
    fn test_clear_field_emits_empty_changed() {
        let mut input = field();
        type_str(&mut input, "abc");
        let res = input.handle_event(&TuiEvent::ClearField);
        assert_eq!(res, Some(FieldEvent::Changed(String::new())));
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_clear_field_on_empty_is_noop() {
        let mut input = field();
        assert_eq!(input.handle_event(&TuiEvent::ClearField), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = field();
        let res = input.handle_event(&TuiEvent::Paste("line one\nline two\r\nthree".to_string()));
        assert_eq!(
            res,
            Some(FieldEvent::Changed("line one line two three".to_string()))
        );
    }

    #[test]
    fn test_paste_of_only_newlines_becomes_space() {
        let mut input = field();
        let res = input.handle_event(&TuiEvent::Paste("\r\n\n".to_string()));
        assert_eq!(res, Some(FieldEvent::Changed(" ".to_string())));
    }

    #[test]
    fn test_empty_paste_is_noop() {
        let mut input = field();
        assert_eq!(input.handle_event(&TuiEvent::Paste(String::new())), None);
    }

    #[test]
    fn test_flatten_newlines() {
        assert_eq!(flatten_newlines("a\nb"), "a b");
        assert_eq!(flatten_newlines("a\r\n\r\nb"), "a b");
        assert_eq!(flatten_newlines("plain"), "plain");
        assert_eq!(flatten_newlines(""), "");
    }

    #[test]
    fn test_visible_text_scrolls_to_keep_cursor_in_view() {
        let mut input = field();
        type_str(&mut input, "abcdefghij");
        // Cursor sits after 'j' at column 10; a 5-wide window shows the
        // tail with one spare cell for the cursor.
        input.update_scroll(5);
        assert_eq!(input.scroll, 6);
        assert_eq!(input.visible_text(5), "ghij");
    }

    #[test]
    fn test_visible_text_follows_cursor_back_left() {
        let mut input = field();
        type_str(&mut input, "abcdefghij");
        input.update_scroll(5);
        input.handle_event(&TuiEvent::CursorHome);
        input.update_scroll(5);
        assert_eq!(input.scroll, 0);
        assert_eq!(input.visible_text(5), "abcde");
    }

    #[test]
    fn test_visible_text_blanks_straddling_wide_char() {
        let mut input = field();
        type_str(&mut input, "🔥🔥");
        // Window [1, 6): the first emoji occupies columns 0..2, so only
        // its second cell is inside and renders as a space.
        input.scroll = 1;
        assert_eq!(input.visible_text(5), " 🔥");
    }

    #[test]
    fn test_scroll_shrinks_after_deleting_text() {
        let mut input = field();
        type_str(&mut input, "abcdefghij");
        input.update_scroll(5);
        assert_eq!(input.scroll, 6);
        for _ in 0..8 {
            input.handle_event(&TuiEvent::Backspace);
        }
        input.update_scroll(5);
        assert_eq!(input.scroll, 0);
        assert_eq!(input.visible_text(5), "ab");
    }

    #[test]
    fn test_prev_char_boundary_multibyte() {
        // In "café" the 'é' starts at byte 3 and is 2 bytes long.
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
    }

    #[test]
    fn test_next_char_boundary_multibyte() {
        let s = "a🔥b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 5), 6);
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Write here the quote"));
        assert!(text.contains("Quote"));
    }

    #[test]
    fn test_render_shows_typed_text_not_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();
        type_str(&mut input, "hello");

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("hello"));
        assert!(!text.contains("Write here the quote"));
    }
}
