//! Render surfaces: where the backdrop's frames end up.
//!
//! A [`GraphicsDevice`] creates a [`RenderTarget`] attached to the page. The target is
//! the only graphics resource the renderer acquires, and releasing it detaches the
//! surface. [`TerminalSurface`] is the production device: it keeps the latest frame in
//! memory, shared with the terminal UI which paints it under the panel.

use crate::background::scene::{RenderedFrame, Rgba};
use crate::error::{Result, TextDropError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Size of the page in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width over height in screen units, given the cell's width/height ratio
    pub fn aspect(&self, cell_aspect: f64) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        f64::from(self.width) * cell_aspect / f64::from(self.height)
    }
}

/// Acquired output surface.
pub trait RenderTarget: Send {
    fn resize(&mut self, viewport: Viewport);

    fn size(&self) -> Viewport;

    fn set_clear_color(&mut self, color: Rgba);

    /// Replace the surface contents with a new frame
    fn present(&mut self, frame: RenderedFrame);

    /// Detach from the page and free the surface. Safe to call more than once.
    fn release(&mut self);
}

/// Factory for render targets.
pub trait GraphicsDevice: Send {
    fn create_target(&mut self, viewport: Viewport) -> Result<Box<dyn RenderTarget>>;
}

/// What the terminal UI reads to paint the backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    pub viewport: Viewport,
    pub clear_color: Rgba,
    pub frame: Option<RenderedFrame>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    attached: bool,
    viewport: Viewport,
    clear_color: Option<Rgba>,
    frame: Option<RenderedFrame>,
    presents: u64,
    releases: u64,
}

/// In-memory surface shared between the renderer and the terminal UI.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, or `None` while nothing is attached
    pub fn snapshot(&self) -> Option<SurfaceSnapshot> {
        let state = self.state.lock();
        if !state.attached {
            return None;
        }
        Some(SurfaceSnapshot {
            viewport: state.viewport,
            clear_color: state.clear_color.unwrap_or(Rgba::TRANSPARENT),
            frame: state.frame.clone(),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.state.lock().attached
    }

    /// Frames presented since creation
    pub fn present_count(&self) -> u64 {
        self.state.lock().presents
    }

    /// Targets released since creation
    pub fn release_count(&self) -> u64 {
        self.state.lock().releases
    }
}

impl GraphicsDevice for TerminalSurface {
    fn create_target(&mut self, viewport: Viewport) -> Result<Box<dyn RenderTarget>> {
        let mut state = self.state.lock();
        if state.attached {
            return Err(TextDropError::graphics("render surface is already attached"));
        }
        if viewport.width == 0 || viewport.height == 0 {
            return Err(TextDropError::graphics(format!(
                "cannot create a {}x{} surface",
                viewport.width, viewport.height
            )));
        }
        state.attached = true;
        state.viewport = viewport;
        state.clear_color = None;
        state.frame = None;
        drop(state);

        Ok(Box::new(CanvasTarget {
            state: Arc::clone(&self.state),
            released: false,
        }))
    }
}

struct CanvasTarget {
    state: Arc<Mutex<SurfaceState>>,
    released: bool,
}

impl RenderTarget for CanvasTarget {
    fn resize(&mut self, viewport: Viewport) {
        if !self.released {
            self.state.lock().viewport = viewport;
        }
    }

    fn size(&self) -> Viewport {
        self.state.lock().viewport
    }

    fn set_clear_color(&mut self, color: Rgba) {
        if !self.released {
            self.state.lock().clear_color = Some(color);
        }
    }

    fn present(&mut self, frame: RenderedFrame) {
        if self.released {
            return;
        }
        let mut state = self.state.lock();
        state.frame = Some(frame);
        state.presents += 1;
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut state = self.state.lock();
        state.attached = false;
        state.frame = None;
        state.releases += 1;
    }
}

impl Drop for CanvasTarget {
    fn drop(&mut self) {
        self.release();
    }
}
