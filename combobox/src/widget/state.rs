//! Combobox widget state and the cursor/selection engine.

use ariadom::Viewport;

use crate::config::ComboboxConfig;
use crate::cursor::{Cursor, Direction};
use crate::label::{DisplayLabel, compute_display_label};
use crate::option::{OptionList, OptionSource, OptionValue};
use crate::selection::SelectionSet;

use super::events::Effect;
use super::render::option_id;

/// A select-only, multi-select combobox.
///
/// Owns the option list, visibility, the virtual cursor and the selection.
/// All mutation goes through `&mut self` event handlers; the host drains
/// [`Effect`]s and re-renders while [`Combobox::is_dirty`] is set.
///
/// # Example
///
/// ```
/// use combobox::{Combobox, ComboboxConfig, ComboOption, Direction};
///
/// let mut cb = Combobox::with_options(
///     ComboboxConfig::new(),
///     vec![ComboOption::simple("Europe"), ComboOption::simple("Asia")],
/// );
/// cb.set_visible(true);
/// cb.move_cursor(Direction::Next);
/// cb.toggle_selection(0);
/// assert_eq!(cb.display_label().text, "Europe");
/// ```
#[derive(Debug, Clone)]
pub struct Combobox {
    pub(super) config: ComboboxConfig,
    pub(super) options: OptionList,
    pub(super) open: bool,
    pub(super) cursor: Cursor,
    pub(super) selection: SelectionSet,
    pub(super) label: DisplayLabel,
    pub(super) viewport: Viewport,
    pub(super) effects: Vec<Effect>,
    pub(super) dirty: bool,
}

impl Default for Combobox {
    fn default() -> Self {
        Self::new(ComboboxConfig::default())
    }
}

impl Combobox {
    /// Create a closed combobox with no options.
    pub fn new(config: ComboboxConfig) -> Self {
        let label = compute_display_label::<&str>(&[], &config.placeholder, config.truncate_at);
        Self {
            config,
            options: OptionList::default(),
            open: false,
            cursor: Cursor::new(),
            selection: SelectionSet::new(),
            label,
            viewport: Viewport::default(),
            effects: Vec::new(),
            dirty: true,
        }
    }

    /// Create a combobox and load options from `source`.
    pub fn with_options(config: ComboboxConfig, source: impl Into<OptionSource>) -> Self {
        let mut combobox = Self::new(config);
        combobox.set_options(Some(&source.into()));
        combobox
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    /// Replace the option list.
    ///
    /// Cursor, selection and scroll offset all reset. A missing or malformed
    /// source leaves the widget usable with an empty list.
    pub fn set_options(&mut self, source: Option<&OptionSource>) {
        self.options = OptionList::from_source(source);
        self.cursor.clear();
        self.selection.clear();
        self.viewport.reset();
        let content_height = self.row_offset(self.options.len()).unwrap_or_else(|| {
            log::warn!(
                "Combobox::set_options {} options exceed {} rows, scrolling is capped",
                self.options.len(),
                u16::MAX
            );
            u16::MAX
        });
        self.viewport.set_scroll_height(content_height);
        self.refresh_label();
        self.dirty = true;

        log::debug!("Combobox::set_options count={}", self.options.len());
    }

    /// Set how many rows of the list are visible at once.
    pub fn set_list_height(&mut self, rows: u16) {
        if self.viewport.client_height != rows {
            self.viewport.set_client_height(rows);
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Observable state
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the virtually focused option.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Whether `index` carries the focus style.
    pub fn is_item_focused(&self, index: usize) -> bool {
        self.cursor.is_at(index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Selected indices in list order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.iter().collect()
    }

    /// Labels of selected options in list order.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selection.labels(&self.options)
    }

    /// Values of selected options in list order.
    pub fn selected_values(&self) -> Vec<&OptionValue> {
        self.selection
            .iter()
            .filter_map(|i| self.options.get(i))
            .map(|opt| &opt.value)
            .collect()
    }

    pub fn display_label(&self) -> &DisplayLabel {
        &self.label
    }

    /// ID of the cursor item, or an empty string when there is none.
    pub fn active_descendant(&self) -> String {
        self.cursor.index().map(option_id).unwrap_or_default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // -------------------------------------------------------------------------
    // Cursor & selection engine
    // -------------------------------------------------------------------------

    /// Move the virtual cursor one step, wrapping at both ends, and scroll the
    /// new item into view. No-op on an empty list.
    pub fn move_cursor(&mut self, direction: Direction) -> Option<usize> {
        let index = self.cursor.step(direction, self.options.len())?;

        match self.row_offset(index) {
            Some(top) => {
                if self.viewport.ensure_visible(top, self.config.item_height) {
                    log::debug!("Combobox scrolled to {}", self.viewport.scroll_top);
                }
            }
            None => log::warn!(
                "Combobox::move_cursor option {} lies past the last scrollable row, not scrolling",
                index
            ),
        }

        log::debug!("Combobox::move_cursor {:?} -> {}", direction, index);
        self.effects.push(Effect::CursorMoved(Some(index)));
        self.dirty = true;
        Some(index)
    }

    /// Flip selection of `index`, then rebuild the label from the whole list.
    ///
    /// Returns the new membership; indices outside the list are ignored.
    /// The cursor is not moved.
    pub fn toggle_selection(&mut self, index: usize) -> Option<bool> {
        let Some(selected) = self.selection.toggle(index, &self.options) else {
            log::debug!("Combobox::toggle_selection ignoring stale index {}", index);
            return None;
        };

        self.refresh_label();
        log::debug!(
            "Combobox::toggle_selection {} selected={} label={:?}",
            index,
            selected,
            self.label.text
        );
        self.effects
            .push(Effect::SelectionChanged { index, selected });
        self.dirty = true;
        Some(selected)
    }

    // -------------------------------------------------------------------------
    // Host integration
    // -------------------------------------------------------------------------

    /// Take the side effects queued since the last call.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Whether observable state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn refresh_label(&mut self) {
        let labels = self.selection.labels(&self.options);
        self.label =
            compute_display_label(&labels, &self.config.placeholder, self.config.truncate_at);
    }

    /// Row offset of item `index`, or total height when `index == len`.
    /// None when it does not fit in a `u16` row coordinate.
    fn row_offset(&self, index: usize) -> Option<u16> {
        let rows = index.checked_mul(usize::from(self.config.item_height))?;
        u16::try_from(rows).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::ComboOption;

    fn continents() -> Combobox {
        Combobox::with_options(
            ComboboxConfig::new(),
            vec![
                ComboOption::simple("Europe"),
                ComboOption::simple("Asia"),
                ComboOption::simple("Africa"),
                ComboOption::simple("Australia"),
            ],
        )
    }

    #[test]
    fn initial_state() {
        let cb = continents();
        assert!(!cb.is_open());
        assert_eq!(cb.cursor(), None);
        assert!(cb.selected_indices().is_empty());
        assert_eq!(cb.display_label().text, "Select a colour");
        assert_eq!(cb.active_descendant(), "");
    }

    #[test]
    fn toggle_selection_keeps_cursor() {
        let mut cb = continents();
        cb.move_cursor(Direction::Next);
        cb.toggle_selection(3);
        assert_eq!(cb.cursor(), Some(0));
        assert_eq!(cb.selected_labels(), vec!["Australia"]);
    }

    #[test]
    fn selection_label_follows_list_order() {
        let mut cb = continents();
        cb.toggle_selection(2);
        cb.toggle_selection(0);
        assert_eq!(cb.display_label().text, "Europe, Africa");
        assert_eq!(cb.display_label().badge(), "2 selected");
    }

    #[test]
    fn set_options_resets_cursor_and_selection() {
        let mut cb = continents();
        cb.move_cursor(Direction::Prev);
        cb.toggle_selection(1);

        cb.set_options(Some(&OptionSource::from(r#"[{"label": "Yes", "value": true}]"#)));

        assert_eq!(cb.cursor(), None);
        assert!(cb.selected_indices().is_empty());
        assert_eq!(cb.display_label().text, "Select a colour");
        assert_eq!(cb.toggle_selection(1), None);
    }

    #[test]
    fn move_cursor_scrolls_long_lists() {
        let mut cb = continents();
        cb.set_list_height(2);

        cb.move_cursor(Direction::Prev);
        assert_eq!(cb.cursor(), Some(3));
        assert_eq!(cb.viewport().scroll_top, 2);

        cb.move_cursor(Direction::Next);
        assert_eq!(cb.cursor(), Some(0));
        assert_eq!(cb.viewport().scroll_top, 0);
    }

    #[test]
    fn rows_past_u16_range_do_not_scroll() {
        let mut cb = Combobox::with_options(
            ComboboxConfig::new().item_height(40_000),
            vec![
                ComboOption::simple("Europe"),
                ComboOption::simple("Asia"),
                ComboOption::simple("Africa"),
            ],
        );
        cb.set_list_height(1);
        assert_eq!(cb.viewport().scroll_height, u16::MAX);

        cb.move_cursor(Direction::Next);
        cb.move_cursor(Direction::Next);
        let scrolled_to = cb.viewport().scroll_top;
        assert_eq!(scrolled_to, u16::MAX - 1);

        // Option 2 starts at row 80_000
        assert_eq!(cb.move_cursor(Direction::Next), Some(2));
        assert_eq!(cb.viewport().scroll_top, scrolled_to);
    }
}
