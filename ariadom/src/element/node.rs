use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag used for bare text nodes. Markup output inlines these.
pub(crate) const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Markup (attributes keep insertion order)
    pub attributes: Vec<(String, String)>,
    pub classes: Vec<String>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    /// Vertical scroll offset of a scroll container, in rows.
    pub scroll_offset: u16,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".into(),
            content: Content::None,
            attributes: Vec::new(),
            classes: Vec::new(),
            focusable: false,
            clickable: false,
            scroll_offset: 0,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn heading(level: u8) -> Self {
        Self::new(format!("h{}", level.clamp(1, 6)))
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: TEXT_TAG.into(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add the class only when `enabled` is true.
    pub fn class_if(self, class: impl Into<String>, enabled: bool) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn scroll_offset(mut self, offset: u16) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Replace the content with a text node.
    pub fn content_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        let new_children: Vec<Element> = new_children.into_iter().collect();
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children),
        }
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    /// Concatenated text of this element and all descendants, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = Element::div().attr("aria-expanded", "false");
        el.set_attr("aria-expanded", "true");
        assert_eq!(el.get_attr("aria-expanded"), Some("true"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn class_is_not_duplicated() {
        let el = Element::li().class("focus").class("focus");
        assert_eq!(el.classes, vec!["focus".to_string()]);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let el = Element::div()
            .child(Element::text("Asia"))
            .child(Element::span().content_text("1 selected"));
        assert_eq!(el.text_content(), "Asia1 selected");
    }
}
