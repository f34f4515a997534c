//! UI state management structures
//!
//! Screen-level state the terminal UI needs besides the page itself: the viewport size
//! and whether a clipboard read is outstanding.

/// Screen state for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,

    /// A clipboard read was started and has not reported back yet
    pub clipboard_pending: bool,
}

impl ViewState {
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            viewport_width,
            viewport_height,
            clipboard_pending: false,
        }
    }

    /// Update terminal dimensions. Returns true if they actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        self.viewport_width = width;
        self.viewport_height = height;
        changed
    }

    /// Too small to draw the panel in
    pub fn is_cramped(&self) -> bool {
        self.viewport_width < MIN_WIDTH || self.viewport_height < MIN_HEIGHT
    }
}

/// Smallest terminal the panel layout fits in.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 14;

/// First visible line so the cursor line stays inside `rows` visible rows
pub fn scroll_offset(cursor_line: usize, rows: usize) -> usize {
    if rows == 0 {
        return cursor_line;
    }
    cursor_line.saturating_sub(rows - 1)
}
