use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el| el.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|_| true)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    // Elements without a rect (hidden, text runs) can still have laid-out children
    let inside = layout.get(&element.id).map(|r| r.contains(x, y));
    if inside == Some(false) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.content.children().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    if inside == Some(true) && accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
