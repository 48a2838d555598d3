//! # QuoteList Component
//!
//! Scrollable view of every accepted quote.
//!
//! ## Responsibilities
//!
//! - Display quote cards oldest-first
//! - Manage scrolling, including stick-to-bottom on new submissions
//!
//! ## Architecture
//!
//! `QuoteList` is a transient component (created each frame) that wraps
//! `&'a mut QuoteListState` (persistent state) and the record slice (props).
//!
//! Card heights are recomputed every frame. The list only changes when a
//! submission lands or the terminal resizes, and measuring a handful of
//! cards with `textwrap` is cheap, so there is no layout cache to
//! invalidate.

use ratatui::layout::{Position, Rect, Size};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::quote::QuoteRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::quote_card::QuoteCard;
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the quote list.
/// Must be persisted in the parent TuiState.
pub struct QuoteListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Card heights from the last render pass
    heights: Vec<u16>,
}

impl Default for QuoteListState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            heights: Vec::new(),
        }
    }

    /// Re-engage auto-scroll, used when a new submission lands.
    pub fn follow_bottom(&mut self) {
        self.stick_to_bottom = true;
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last card.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the end
    /// re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable quote view component.
/// Created fresh each frame with references to state and data.
pub struct QuoteList<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut QuoteListState,
    pub records: &'a [QuoteRecord],
}

impl<'a> QuoteList<'a> {
    pub fn new(state: &'a mut QuoteListState, records: &'a [QuoteRecord]) -> Self {
        Self { state, records }
    }
}

impl<'a> Component for QuoteList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Measure every card at the current width
        self.state.heights.clear();
        for record in self.records {
            self.state
                .heights
                .push(QuoteCard::calculate_height(record, content_width));
        }
        let total_height: u16 = self.state.heights.iter().sum();

        // 2. Clamp scroll offset to prevent overscrolling past content.
        // Skip when auto-scrolling: scroll_to_bottom handles the offset.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        // 3. Render cards into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (record, &height) in self.records.iter().zip(&self.state.heights) {
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(QuoteCard::new(record), card_rect);
            y_offset += height;
        }

        // Auto-scroll logic (Mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `QuoteListState` rather than `QuoteList`
/// because:
/// 1. Event handling requires persistent state (scroll position, stick flag)
/// 2. `QuoteList` is recreated each frame with fresh props, so it can't hold state
/// 3. The state object lives in `TuiState` and persists across the event loop
impl EventHandler for QuoteListState {
    type Event = (); // QuoteList emits no events (scroll handled internally)

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            _ => None,
        }
    }
}
