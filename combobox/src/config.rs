//! Widget configuration.

/// Placeholder shown while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select a colour";

/// Text of the heading that labels the widget.
pub const DEFAULT_LABEL: &str = "Favorite colour";

/// Maximum length of the joined selection text before it is cut.
pub const DEFAULT_TRUNCATE_AT: usize = 30;

/// Per-instance configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxConfig {
    /// Shown in the toggle while the selection is empty.
    pub placeholder: String,

    /// Heading text; both the toggle and the list are labelled by it.
    pub label: String,

    /// Rows occupied by a single option. Drives the list's scroll geometry.
    pub item_height: u16,

    /// Character count after which the joined labels are cut and an
    /// ellipsis appended.
    pub truncate_at: usize,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.into(),
            label: DEFAULT_LABEL.into(),
            item_height: 1,
            truncate_at: DEFAULT_TRUNCATE_AT,
        }
    }
}

impl ComboboxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the heading label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the height of one option row. Zero is treated as one.
    pub fn item_height(mut self, rows: u16) -> Self {
        self.item_height = rows.max(1);
        self
    }

    /// Set the truncation length for the joined selection text.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }
}
