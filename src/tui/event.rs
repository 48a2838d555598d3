use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit, // Ctrl+C - quits regardless of focus
    Quit,
    Submit,

    // Focus movement
    NextField,
    PrevField,

    // Editing (routed to the focused field)
    InputChar(char),
    Paste(String), // Bracketed paste - newlines flattened before insertion
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearField, // Ctrl+U

    // Quote list scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    Resize,
}

/// Poll for an event with timeout
pub fn poll_event(timeout: std::time::Duration) -> Option<TuiEvent> {
    poll_event_timeout(timeout)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                // Release/repeat events double up keystrokes on terminals
                // that report them (Windows, kitty protocol).
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    // Ctrl+U clears the focused field, shell style
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(TuiEvent::ClearField),
                    // Swallow other Ctrl chords so they don't type letters
                    (KeyModifiers::CONTROL, KeyCode::Char(_)) => None,
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    // Shift+Tab arrives as BackTab with the SHIFT modifier set
                    (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
                    (_, KeyCode::Tab) => Some(TuiEvent::NextField),
                    (_, KeyCode::Up) => Some(TuiEvent::PrevField),
                    (_, KeyCode::Down) => Some(TuiEvent::NextField),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                    (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
