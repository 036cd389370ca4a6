mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Screen rectangles keyed by element ID, produced by whatever host lays the
/// tree out.
#[derive(Debug, Default, Clone)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
