//! Model layer - page data and shared UI vocabulary
//!
//! This module contains all state-related types:
//! - `Recipe`, `SwipeItem` - Literal page data
//! - `Tab`, `Panel`, `Focus` - Presentation state vocabulary
//! - `ModalStack` - Modal overlay management

pub mod modal;
pub mod recipe;
pub mod ui;

// Re-export commonly used types
pub use recipe::{Recipe, SwipeItem};
pub use ui::{Field, Focus, NavEntry, Panel, Tab};
