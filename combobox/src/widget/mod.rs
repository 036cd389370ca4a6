//! Combobox widget - a select-only, multi-select dropdown with reactive state.

pub mod events;
pub mod render;
mod state;
mod visibility;

pub use events::{Effect, EventResult, Part};
pub use state::Combobox;
