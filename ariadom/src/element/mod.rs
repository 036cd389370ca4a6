mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Whether the element with the given ID is `root` or one of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Containment test for event targets against a rendered subtree.
///
/// Widgets use this to decide whether an interaction happened inside their
/// own markup without holding on to the surrounding document.
pub trait Boundary {
    fn contains(&self, target: &str) -> bool;
}

impl Boundary for Element {
    fn contains(&self, target: &str) -> bool {
        contains(self, target)
    }
}
