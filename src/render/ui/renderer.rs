//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait for drawing the page and managing
//! terminal lifecycle hooks such as initialization and cleanup.

use crate::app::Page;
use crate::error::Result;
use crate::render::ui::state::ViewState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Draw the backdrop, the panel and any visible notifications
    fn render(&mut self, page: &Page, view_state: &ViewState) -> Result<()>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enable bracketed paste
    /// - Switch to the alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}
