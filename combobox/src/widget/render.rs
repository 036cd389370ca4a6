//! Rendering of the combobox into an accessible element tree.
//!
//! Attribute names and values here are what assistive technology reads, so
//! they are kept exact.

use ariadom::Element;

use super::Combobox;

pub const WRAPPER_ID: &str = "combobox-wrapper";
pub const HEADING_ID: &str = "main-label";
pub const TOGGLE_ID: &str = "combobox";
pub const VALUE_ID: &str = "combobox-value";
pub const BADGE_ID: &str = "combobox-total-selected";
pub const LIST_ID: &str = "combobox-listbox";

/// Class that hides the list while closed.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class carried by the option under the virtual cursor.
pub const FOCUS_CLASS: &str = "focus";

const OPTION_ID_PREFIX: &str = "option-";

/// Element ID of the option at `index`.
pub fn option_id(index: usize) -> String {
    format!("{OPTION_ID_PREFIX}{index}")
}

/// Parse an option index back out of its element ID.
///
/// Only IDs that [`option_id`] produces are accepted.
pub fn option_index(id: &str) -> Option<usize> {
    let index = id.strip_prefix(OPTION_ID_PREFIX)?.parse().ok()?;
    (option_id(index) == id).then_some(index)
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl Combobox {
    /// Build the element tree for the current state.
    pub fn render(&self) -> Element {
        log::debug!(
            "Combobox::render open={} cursor={:?} selected={}",
            self.open,
            self.cursor.index(),
            self.selection.len()
        );

        Element::div()
            .id(WRAPPER_ID)
            .class("dropdown-wrapper")
            .child(
                Element::heading(3)
                    .id(HEADING_ID)
                    .content_text(&self.config.label),
            )
            .child(self.render_toggle())
            .child(self.render_list())
    }

    fn render_toggle(&self) -> Element {
        Element::div()
            .id(TOGGLE_ID)
            .class("combobox")
            .attr("role", "combobox")
            .attr("tabindex", "0")
            .attr("aria-haspopup", "listbox")
            .attr("aria-labelledby", format!("{HEADING_ID} {TOGGLE_ID}"))
            .attr("aria-expanded", bool_attr(self.open))
            .focusable(true)
            .clickable(true)
            .child(
                Element::span()
                    .id(VALUE_ID)
                    .content_text(&self.label.text),
            )
            .child(
                Element::span()
                    .id(BADGE_ID)
                    .class("combobox__total-selected")
                    .attr("aria-live", "polite")
                    .content_text(self.label.badge()),
            )
    }

    fn render_list(&self) -> Element {
        let items = self.options.iter().enumerate().map(|(i, option)| {
            Element::li()
                .id(option_id(i))
                .class("combobox__list-item")
                .class_if(FOCUS_CLASS, self.cursor.is_at(i))
                .attr("value", option.value.to_string())
                .attr("role", "option")
                .attr("aria-selected", bool_attr(self.selection.contains(i)))
                .clickable(true)
                .content_text(&option.label)
        });

        // tabindex=-1: reachable by script, not by Tab
        Element::ul()
            .id(LIST_ID)
            .class("combobox__list")
            .class_if(HIDDEN_CLASS, !self.open)
            .attr("tabindex", "-1")
            .attr("role", "listbox")
            .attr("aria-labelledby", HEADING_ID)
            .attr("aria-activedescendant", self.active_descendant())
            .attr("aria-multiselectable", "true")
            .scroll_offset(self.viewport.scroll_top)
            .children(items)
    }
}
