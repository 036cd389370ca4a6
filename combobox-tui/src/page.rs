//! The demo page: the widget's element tree plus a few host elements, and a
//! line-per-row layout of it for the terminal.
//!
//! Layout reads only the rendered tree (classes and ARIA attributes), never
//! the widget's state directly.

use ariadom::{find_element, Element, LayoutResult, Rect};
use combobox::widget::render::{
    BADGE_ID, FOCUS_CLASS, HEADING_ID, HIDDEN_CLASS, LIST_ID, TOGGLE_ID, VALUE_ID, WRAPPER_ID,
};
use unicode_width::UnicodeWidthChar;

pub const PAGE_ID: &str = "page";
pub const STATUS_ID: &str = "page-status";
pub const DONE_ID: &str = "done-button";
pub const HELP_ID: &str = "page-help";

const HELP: &str = "↑/↓ move · Space/Enter toggle · Esc close · Tab focus · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Dim,
    Bold,
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: String,
    pub text: String,
    pub style: LineStyle,
}

/// Wrap the widget tree in the page.
pub fn build_page(widget: Element, status: &str) -> Element {
    Element::div()
        .id(PAGE_ID)
        .child(widget)
        .child(Element::div().id(STATUS_ID).content_text(status))
        .child(
            Element::div()
                .id(DONE_ID)
                .attr("role", "button")
                .attr("tabindex", "0")
                .focusable(true)
                .clickable(true)
                .content_text("Done"),
        )
        .child(Element::div().id(HELP_ID).content_text(HELP))
}

/// Lay the page out as terminal rows.
///
/// `list_rows` caps how many options are shown at once (0 shows all),
/// starting at the list's scroll offset.
pub fn layout_page(
    page: &Element,
    focused: Option<&str>,
    list_rows: u16,
    width: u16,
) -> (Vec<Line>, LayoutResult) {
    let mut rows = Rows::new(width);
    let text_of = |id: &str| {
        find_element(page, id)
            .map(Element::text_content)
            .unwrap_or_default()
    };
    let style_for = |id: &str, base: LineStyle| {
        if focused == Some(id) {
            LineStyle::Reverse
        } else {
            base
        }
    };

    let widget_top = rows.next_row();
    rows.push(HEADING_ID, text_of(HEADING_ID), LineStyle::Bold);

    if let Some(toggle) = find_element(page, TOGGLE_ID) {
        let arrow = if toggle.get_attr("aria-expanded") == Some("true") {
            "▲"
        } else {
            "▼"
        };
        let text = format!(
            "[ {} ] ({}) {}",
            text_of(VALUE_ID),
            text_of(BADGE_ID),
            arrow
        );
        rows.push(TOGGLE_ID, text, style_for(TOGGLE_ID, LineStyle::Plain));
    }

    if let Some(list) = find_element(page, LIST_ID).filter(|l| !l.has_class(HIDDEN_CLASS)) {
        let list_top = rows.next_row();
        let visible = match list_rows {
            0 => usize::MAX,
            n => n as usize,
        };
        let list_focused = focused == Some(LIST_ID);

        for item in list
            .content
            .children()
            .iter()
            .skip(list.scroll_offset as usize)
            .take(visible)
        {
            let under_cursor = item.has_class(FOCUS_CLASS);
            let check = if item.get_attr("aria-selected") == Some("true") {
                "[x]"
            } else {
                "[ ]"
            };
            let marker = if under_cursor { '>' } else { ' ' };
            let style = match (under_cursor, list_focused) {
                (true, true) => LineStyle::Reverse,
                (true, false) => LineStyle::Bold,
                _ => LineStyle::Plain,
            };
            rows.push(
                &item.id,
                format!(" {marker} {check} {}", item.text_content()),
                style,
            );
        }
        rows.span(LIST_ID, list_top);
    }
    rows.span(WRAPPER_ID, widget_top);

    rows.blank();
    rows.push(STATUS_ID, text_of(STATUS_ID), LineStyle::Dim);
    rows.push(DONE_ID, "[ Done ]".to_string(), style_for(DONE_ID, LineStyle::Plain));
    rows.push(HELP_ID, text_of(HELP_ID), LineStyle::Dim);
    rows.span(PAGE_ID, 0);

    (rows.lines, rows.layout)
}

struct Rows {
    lines: Vec<Line>,
    layout: LayoutResult,
    width: u16,
}

impl Rows {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            layout: LayoutResult::new(),
            width,
        }
    }

    fn next_row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn push(&mut self, id: &str, text: String, style: LineStyle) {
        let row = self.next_row();
        self.layout
            .insert(id.to_string(), Rect::new(0, row, self.width, 1));
        self.lines.push(Line {
            id: id.to_string(),
            text: fit(&text, self.width),
            style,
        });
    }

    fn blank(&mut self) {
        self.lines.push(Line {
            id: String::new(),
            text: String::new(),
            style: LineStyle::Plain,
        });
    }

    /// Give `id` a rect covering every row pushed since `top`.
    fn span(&mut self, id: &str, top: u16) {
        let height = self.next_row().saturating_sub(top);
        if height > 0 {
            self.layout
                .insert(id.to_string(), Rect::new(0, top, self.width, height));
        }
    }
}

/// Cut `text` to at most `width` terminal columns.
fn fit(text: &str, width: u16) -> String {
    let mut used = 0usize;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width as usize
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadom::hit_test_any;
    use combobox::{ComboOption, Combobox, ComboboxConfig, Direction};

    fn open_page(list_rows: u16) -> (Vec<Line>, LayoutResult, Element) {
        let mut cb = Combobox::with_options(
            ComboboxConfig::new(),
            vec![
                ComboOption::simple("Europe"),
                ComboOption::simple("Asia"),
                ComboOption::simple("Africa"),
            ],
        );
        cb.set_list_height(list_rows);
        cb.set_visible(true);
        cb.move_cursor(Direction::Prev);
        cb.toggle_selection(0);

        let page = build_page(cb.render(), "");
        let (lines, layout) = layout_page(&page, Some(LIST_ID), list_rows, 60);
        (lines, layout, page)
    }

    #[test]
    fn closed_list_has_no_option_rows() {
        let cb = Combobox::default();
        let page = build_page(cb.render(), "");
        let (lines, _) = layout_page(&page, Some(TOGGLE_ID), 0, 60);

        assert_eq!(lines[1].text, "[ Select a colour ] (0 selected) ▼");
        assert_eq!(lines[1].style, LineStyle::Reverse);
        assert!(lines.iter().all(|l| !l.id.starts_with("option-")));
    }

    #[test]
    fn open_list_shows_window_from_scroll_offset() {
        let (lines, _, _) = open_page(2);

        let items: Vec<_> = lines
            .iter()
            .filter(|l| l.id.starts_with("option-"))
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(items, vec!["   [ ] Asia", " > [ ] Africa"]);
    }

    #[test]
    fn clicks_resolve_to_option_ids() {
        let (lines, layout, page) = open_page(0);
        let row = lines.iter().position(|l| l.id == "option-0").unwrap() as u16;

        assert_eq!(lines[row as usize].text, "   [x] Europe");
        assert_eq!(
            hit_test_any(&layout, &page, 4, row),
            Some("option-0".to_string())
        );
    }

    #[test]
    fn fit_counts_columns() {
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("日本語", 4), "日本");
    }
}
