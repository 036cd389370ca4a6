/// Vertical scroll geometry of a scroll container.
///
/// Mirrors the three numbers a browser exposes on an overflowing box:
/// `scroll_top`, `client_height` (visible rows) and `scroll_height`
/// (total content rows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: u16,
    pub client_height: u16,
    pub scroll_height: u16,
}

impl Viewport {
    pub fn new(client_height: u16, scroll_height: u16) -> Self {
        Self {
            scroll_top: 0,
            client_height,
            scroll_height,
        }
    }

    /// Whether the content is taller than the visible area.
    /// An unmeasured viewport (no visible rows) never overflows.
    pub fn overflows(&self) -> bool {
        self.client_height > 0 && self.scroll_height > self.client_height
    }

    /// Bottom edge of the visible area, in content coordinates.
    pub fn scroll_bottom(&self) -> u16 {
        self.scroll_top.saturating_add(self.client_height)
    }

    /// Scroll the minimum distance needed to show the item spanning
    /// `top..top + height`. Returns true if the offset changed.
    pub fn ensure_visible(&mut self, top: u16, height: u16) -> bool {
        if !self.overflows() {
            return false;
        }

        let bottom = top.saturating_add(height);
        let new_top = if bottom > self.scroll_bottom() {
            bottom - self.client_height
        } else if top < self.scroll_top {
            top
        } else {
            return false;
        };

        log::trace!("[viewport] scroll_top {} -> {}", self.scroll_top, new_top);
        self.scroll_top = new_top;
        true
    }

    /// Update the content height, clamping the offset to the new range.
    pub fn set_scroll_height(&mut self, scroll_height: u16) {
        self.scroll_height = scroll_height;
        self.clamp();
    }

    /// Update the visible height, clamping the offset to the new range.
    pub fn set_client_height(&mut self, client_height: u16) {
        self.client_height = client_height;
        self.clamp();
    }

    pub fn reset(&mut self) {
        self.scroll_top = 0;
    }

    fn clamp(&mut self) {
        let max = self.scroll_height.saturating_sub(self.client_height);
        self.scroll_top = self.scroll_top.min(max);
    }
}
