//! Main content region and its scroll lock.

/// Cooperative lock suppressing background scrolling while the modal is up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Vertically scrollable page holding the header, carousel and footer
#[derive(Debug, Clone, Default)]
pub struct MainContent {
    scroll_y: u16,
    content_height: u16,
    viewport_height: u16,
    pub lock: ScrollLock,
}

impl MainContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll_y
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Update the page geometry after a resize
    pub fn set_geometry(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Scroll by `delta` rows. Ignored while locked; returns true if the page moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if self.lock.is_locked() {
            return false;
        }
        let next = (self.scroll_y as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        let moved = next != self.scroll_y;
        self.scroll_y = next;
        moved
    }
}
