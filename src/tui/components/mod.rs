//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing the quote count and status
//! - `QuoteCard`: Individual quote rendering with attribution
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `FieldInput`: Single-line text field with validity tinting
//! - `QuoteList`: Scrollable quote view with stick-to-bottom
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. `QuoteList` renders multiple `QuoteCard`
//! components. This mirrors React's component model.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling, and tests.
//! You can read one file to understand how a component works.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields pushed in by
//! the main loop), not by directly accessing global state. This makes
//! dependencies explicit and components testable.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── field_input.rs   (Single-line text field)
//! ├── quote_card.rs    (Single quote renderer)
//! └── quote_list.rs    (Scrollable quote container)
//! ```

// Re-export components
mod title_bar;
pub use title_bar::TitleBar;

pub mod field_input;
pub mod quote_card;
pub use field_input::{FieldEvent, FieldInput, FIELD_HEIGHT};
pub mod quote_list;
pub use quote_list::{QuoteList, QuoteListState};
