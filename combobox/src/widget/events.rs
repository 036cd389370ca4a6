//! Keyboard and pointer protocol for the combobox.
//!
//! Key events are expected to target the element holding real input focus
//! (the toggle or the list container); clicks target the element under the
//! pointer. Everything runs synchronously to completion.

use ariadom::{Boundary, Event, Key, MouseButton};

use crate::cursor::Direction;

use super::Combobox;
use super::render::{self, BADGE_ID, HEADING_ID, LIST_ID, TOGGLE_ID, VALUE_ID, WRAPPER_ID};

// =============================================================================
// Results and effects
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not for the combobox.
    Ignored,
    /// State may have changed; the event's default action still applies
    /// (e.g. Tab keeps moving focus).
    Handled,
    /// Handled, and the default action must be suppressed.
    Consumed,
}

impl EventResult {
    pub fn prevents_default(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Side effects the host applies after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move real input focus to the element with this ID.
    Focus(String),
    /// The list became visible.
    Opened,
    /// The list was hidden.
    Closed,
    /// The virtual cursor moved (None when cleared).
    CursorMoved(Option<usize>),
    /// An option's selection flipped.
    SelectionChanged { index: usize, selected: bool },
}

// =============================================================================
// Widget regions
// =============================================================================

/// The part of the widget an event target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Wrapper,
    Heading,
    Toggle,
    List,
    Option(usize),
}

impl Combobox {
    /// Resolve an element ID to a part of this widget.
    pub fn part_of(&self, target: &str) -> Option<Part> {
        part_of(target, self.options.len())
    }
}

fn part_of(target: &str, option_count: usize) -> Option<Part> {
    match target {
        WRAPPER_ID => Some(Part::Wrapper),
        HEADING_ID => Some(Part::Heading),
        TOGGLE_ID | VALUE_ID | BADGE_ID => Some(Part::Toggle),
        LIST_ID => Some(Part::List),
        _ => render::option_index(target)
            .filter(|&i| i < option_count)
            .map(Part::Option),
    }
}

impl Boundary for Combobox {
    fn contains(&self, target: &str) -> bool {
        self.part_of(target).is_some()
    }
}

// =============================================================================
// Dispatch
// =============================================================================

impl Combobox {
    /// Handle an event from anywhere in the document, using the widget's own
    /// element IDs as its boundary.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        let boundary = self.own_boundary();
        self.handle_document_event(event, &boundary)
    }

    /// Handle an event from anywhere in the document.
    ///
    /// Interactions outside `boundary` close the list; the rest are routed to
    /// the toggle or list handlers.
    pub fn handle_document_event(&mut self, event: &Event, boundary: &dyn Boundary) -> EventResult {
        if self.dismiss_if_outside(event, boundary) {
            return EventResult::Ignored;
        }

        match event {
            Event::Key {
                target: Some(target),
                key,
                ..
            } => match self.part_of(target) {
                Some(Part::Toggle) => self.on_toggle_key(*key),
                Some(Part::List | Part::Option(_)) => self.on_list_key(*key),
                _ => EventResult::Ignored,
            },
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => match self.part_of(target) {
                Some(Part::Toggle) => self.on_toggle_click(),
                Some(Part::Option(index)) => self.on_option_click(index),
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    /// Keydown on the toggle control.
    pub fn on_toggle_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Down => {
                self.set_visible(true);
                self.move_cursor(Direction::Next);
                EventResult::Consumed
            }
            Key::Up => {
                self.set_visible(true);
                self.move_cursor(Direction::Prev);
                EventResult::Consumed
            }
            // Opens without placing the cursor
            Key::Enter | Key::Char(' ') => {
                self.set_visible(true);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Keydown on the list container.
    pub fn on_list_key(&mut self, key: Key) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }

        match key {
            Key::Escape => {
                self.set_visible(false);
                self.effects.push(Effect::Focus(TOGGLE_ID.to_string()));
                EventResult::Handled
            }
            Key::Down => {
                self.move_cursor(Direction::Next);
                EventResult::Consumed
            }
            Key::Up => {
                self.move_cursor(Direction::Prev);
                EventResult::Consumed
            }
            // Focus leaves through normal tab order
            Key::Tab | Key::BackTab => {
                self.set_visible(false);
                EventResult::Handled
            }
            Key::Enter => match self.cursor.index() {
                Some(index) => {
                    self.toggle_selection(index);
                    EventResult::Handled
                }
                None => EventResult::Ignored,
            },
            Key::Char(' ') => match self.cursor.index() {
                Some(index) => {
                    self.toggle_selection(index);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    /// Pointer click on the toggle control.
    ///
    /// Opening this way also places the cursor on the first option, unlike
    /// opening with Enter or Space.
    pub fn on_toggle_click(&mut self) -> EventResult {
        if self.open {
            self.set_visible(false);
        } else {
            self.set_visible(true);
            self.move_cursor(Direction::Next);
        }
        EventResult::Handled
    }

    /// Pointer click on an option.
    pub fn on_option_click(&mut self, index: usize) -> EventResult {
        match self.toggle_selection(index) {
            Some(_) => EventResult::Handled,
            None => EventResult::Ignored,
        }
    }

    fn own_boundary(&self) -> OwnBoundary {
        OwnBoundary {
            option_count: self.options.len(),
        }
    }
}

/// Snapshot of the widget's element IDs, detached from the `&mut` borrow.
struct OwnBoundary {
    option_count: usize,
}

impl Boundary for OwnBoundary {
    fn contains(&self, target: &str) -> bool {
        part_of(target, self.option_count).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComboboxConfig;
    use crate::option::ComboOption;

    fn continents() -> Combobox {
        Combobox::with_options(
            ComboboxConfig::new(),
            vec![
                ComboOption::simple("Europe"),
                ComboOption::simple("Asia"),
                ComboOption::simple("Africa"),
            ],
        )
    }

    #[test]
    fn enter_on_toggle_opens_without_cursor() {
        let mut cb = continents();
        let result = cb.handle_event(&Event::key(TOGGLE_ID, Key::Enter));
        assert_eq!(result, EventResult::Consumed);
        assert!(cb.is_open());
        assert_eq!(cb.cursor(), None);
    }

    #[test]
    fn enter_on_list_without_cursor_is_ignored() {
        let mut cb = continents();
        cb.set_visible(true);
        assert_eq!(cb.on_list_key(Key::Enter), EventResult::Ignored);
        assert!(cb.selected_indices().is_empty());
    }

    #[test]
    fn list_keys_ignored_while_closed() {
        let mut cb = continents();
        assert_eq!(cb.on_list_key(Key::Down), EventResult::Ignored);
        assert_eq!(cb.cursor(), None);
    }

    #[test]
    fn space_toggles_and_prevents_default() {
        let mut cb = continents();
        cb.on_toggle_key(Key::Down);
        let result = cb.on_list_key(Key::SPACE);
        assert!(result.prevents_default());
        assert!(cb.is_selected(0));
    }

    #[test]
    fn enter_toggles_without_preventing_default() {
        let mut cb = continents();
        cb.on_toggle_key(Key::Down);
        let result = cb.on_list_key(Key::Enter);
        assert_eq!(result, EventResult::Handled);
        assert!(cb.is_selected(0));
    }

    #[test]
    fn stale_option_click_is_outside() {
        let mut cb = continents();
        cb.set_visible(true);
        // option-7 does not exist in a three item list
        let result = cb.handle_event(&Event::click("option-7"));
        assert_eq!(result, EventResult::Ignored);
        assert!(!cb.is_open());
    }

    #[test]
    fn part_resolution() {
        let cb = continents();
        assert_eq!(cb.part_of(BADGE_ID), Some(Part::Toggle));
        assert_eq!(cb.part_of("option-2"), Some(Part::Option(2)));
        assert_eq!(cb.part_of("option-3"), None);
        assert_eq!(cb.part_of("somewhere-else"), None);
    }
}
