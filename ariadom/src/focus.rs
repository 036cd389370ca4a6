use crate::element::Element;

/// Tracks which element holds real input focus.
#[derive(Debug, Default, Clone)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.focus(&new_focus).then_some(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.focus(&new_focus).then_some(new_focus)
    }
}

/// Collect the IDs of all focusable elements in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_focusable_recursive(child, result);
    }
}
