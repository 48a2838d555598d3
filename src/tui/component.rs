use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components follow the React pattern:
/// - Props arrive as struct fields (field text, focus, validity).
/// - Internal presentation state stays private (cursor column, scroll).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can update presentation
/// state during the pass: the field inputs adjust their horizontal
/// scroll window to keep the cursor visible, and the quote list
/// recomputes card heights for the current width.
///
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    ///
    /// `()` for components that consume events without reporting
    /// anything back (the quote list scrolling), a richer enum where
    /// the main loop needs to react (a field reporting edited text).
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
