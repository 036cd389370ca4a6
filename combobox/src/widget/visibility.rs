//! Popup visibility controller.

use ariadom::{Boundary, Event};

use super::Combobox;
use super::events::Effect;
use super::render::LIST_ID;

impl Combobox {
    /// Show or hide the list.
    ///
    /// Guarded: asking for the current state does nothing, so focus and
    /// attribute side effects never repeat. Returns true on a transition.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if visible == self.open {
            return false;
        }

        self.open = visible;
        if visible {
            log::debug!("Combobox opened");
            self.effects.push(Effect::Opened);
            self.effects.push(Effect::Focus(LIST_ID.to_string()));
        } else {
            // Clearing the cursor also drops item focus styling and the
            // active descendant, both of which are derived from it.
            let had_cursor = self.cursor.clear();
            log::debug!("Combobox closed (cursor cleared: {})", had_cursor);
            self.effects.push(Effect::Closed);
            if had_cursor {
                self.effects.push(Effect::CursorMoved(None));
            }
        }
        self.dirty = true;
        true
    }

    /// Flip visibility.
    pub fn toggle_visible(&mut self) -> bool {
        self.set_visible(!self.open)
    }

    /// Close the list when an interaction lands outside the widget.
    ///
    /// `boundary` answers whether a target belongs to the widget's rendered
    /// subtree. Events without a target count as outside. Returns true if the
    /// event was outside.
    pub fn dismiss_if_outside(&mut self, event: &Event, boundary: &dyn Boundary) -> bool {
        if !event.is_interaction() {
            return false;
        }
        let inside = event.target().is_some_and(|t| boundary.contains(t));
        if inside {
            return false;
        }
        if self.set_visible(false) {
            log::debug!("Combobox dismissed by outside {:?}", event.target());
        }
        true
    }
}
