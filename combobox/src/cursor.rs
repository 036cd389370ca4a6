//! Virtual cursor over the option list.
//!
//! The cursor is independent of real input focus, which stays on the toggle
//! or the list container. It is surfaced only through item styling and the
//! list's active descendant.

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_at(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Reset to "none". Returns true if the cursor was set.
    pub fn clear(&mut self) -> bool {
        self.index.take().is_some()
    }

    /// Step circularly over `0..len`. Returns the new index, or None when
    /// the list is empty (the cursor is left untouched).
    pub fn step(&mut self, direction: Direction, len: usize) -> Option<usize> {
        let next = stepped(self.index, direction, len)?;
        self.index = Some(next);
        Some(next)
    }
}

/// Index reached by one circular step from `current` in a list of `len`.
pub fn stepped(current: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;

    let next = match (direction, current) {
        (Direction::Next, None) => 0,
        (Direction::Next, Some(i)) if i >= last => 0,
        (Direction::Next, Some(i)) => i + 1,
        (Direction::Prev, None) | (Direction::Prev, Some(0)) => last,
        (Direction::Prev, Some(i)) => (i - 1).min(last),
    };
    Some(next)
}
