//! Accessible multi-select combobox.
//!
//! A toggle control reveals a list of options. Keyboard and pointer input
//! drive a virtual cursor over the list and toggle per-option selection,
//! while the rendered tree keeps its ARIA attributes (`aria-expanded`,
//! `aria-activedescendant`, `aria-selected`) in step with the state.
//!
//! The widget is host-agnostic: feed it [`ariadom::Event`]s, apply the
//! [`Effect`]s it queues, and render [`Combobox::render`] whenever
//! [`Combobox::is_dirty`] is set.

pub mod config;
pub mod cursor;
pub mod error;
pub mod label;
pub mod option;
pub mod selection;
pub mod widget;

pub use config::{ComboboxConfig, DEFAULT_LABEL, DEFAULT_PLACEHOLDER};
pub use cursor::{Cursor, Direction};
pub use error::ConfigError;
pub use label::{DisplayLabel, compute_display_label};
pub use option::{ComboOption, OptionList, OptionSource, OptionValue};
pub use selection::SelectionSet;
pub use widget::render::{option_id, option_index};
pub use widget::{Combobox, Effect, EventResult, Part};
