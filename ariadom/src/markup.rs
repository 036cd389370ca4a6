//! HTML-like serialization of an element tree, used for snapshots and
//! debugging accessibility output.

use crate::element::{Content, Element};

/// Serialize the tree rooted at `root` as markup.
///
/// Attribute order follows insertion order; text nodes are inlined.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    if element.is_text() {
        if let Content::Text(text) = &element.content {
            escape_into(text, out);
        }
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    write_attr("id", &element.id, out);
    if !element.classes.is_empty() {
        write_attr("class", &element.classes.join(" "), out);
    }
    for (name, value) in &element.attributes {
        write_attr(name, value, out);
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, out),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
