//! Display label derived from the selection.

use std::borrow::Cow;

/// Appended to the joined labels when they are cut.
pub const ELLIPSIS: &str = "...";

/// Text shown on the toggle plus the count for the live badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLabel {
    pub text: String,
    pub count: usize,
}

impl DisplayLabel {
    /// Badge content, e.g. `"2 selected"`. Never truncated.
    pub fn badge(&self) -> String {
        format!("{} selected", self.count)
    }
}

/// Build the toggle label from the selected labels, already in list order.
///
/// Empty input yields the placeholder. Otherwise labels are joined with
/// `", "` and the joined text (not the badge) is cut to `max_chars`
/// characters followed by [`ELLIPSIS`].
pub fn compute_display_label<S: AsRef<str>>(
    selected: &[S],
    placeholder: &str,
    max_chars: usize,
) -> DisplayLabel {
    let joined = if selected.is_empty() {
        placeholder.to_string()
    } else {
        selected
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    };

    DisplayLabel {
        text: truncate(&joined, max_chars).into_owned(),
        count: selected.len(),
    }
}

/// Cut `s` to `max_chars` characters plus an ellipsis when it is longer.
pub fn truncate(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &s[..cut])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_shows_placeholder() {
        let label = compute_display_label::<&str>(&[], "Select a colour", 30);
        assert_eq!(label.text, "Select a colour");
        assert_eq!(label.badge(), "0 selected");
    }

    #[test]
    fn long_selection_is_cut_at_thirty_chars() {
        let label =
            compute_display_label(&["Europe", "Asia", "Africa", "Australia"], "unused", 30);

        assert_eq!(label.text, "Europe, Asia, Africa, Australi...");
        assert_eq!(label.text.chars().count(), 33);
        assert_eq!(label.badge(), "4 selected");
    }

    #[test]
    fn exactly_thirty_chars_is_kept() {
        let s = "a".repeat(30);
        assert_eq!(truncate(&s, 30), s.as_str());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let s = "é".repeat(31);
        let cut = truncate(&s, 30);
        assert_eq!(cut.chars().count(), 33);
        assert!(cut.ends_with(ELLIPSIS));
    }
}
