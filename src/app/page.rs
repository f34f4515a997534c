//! The page: converter panel in front, animated backdrop behind.

use crate::background::{BackgroundRenderer, FrameId, RendererState, Viewport};
use crate::converter::ConverterPanel;

/// Everything on screen. The panel works whether or not the background does.
pub struct Page {
    pub panel: ConverterPanel,
    pub background: Option<BackgroundRenderer>,
}

impl Page {
    pub fn new(panel: ConverterPanel, background: Option<BackgroundRenderer>) -> Self {
        Self { panel, background }
    }

    /// Mount the background. A graphics failure leaves the page usable without it.
    pub fn mount(&mut self, viewport: Viewport) {
        if let Some(background) = self.background.as_mut() {
            if let Err(err) = background.mount(viewport) {
                log::warn!("animated background unavailable: {}", err);
            }
        }
    }

    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.background
            .as_mut()
            .is_some_and(|background| background.resize(viewport))
    }

    /// Hand a due frame to the background
    pub fn deliver_frame(&mut self, id: FrameId) -> bool {
        self.background
            .as_mut()
            .is_some_and(|background| background.on_frame(id))
    }

    /// Tear the background down. Returns true if a running renderer was disposed.
    pub fn unmount(&mut self) -> bool {
        self.background
            .as_mut()
            .is_some_and(BackgroundRenderer::unmount)
    }

    pub fn background_state(&self) -> Option<RendererState> {
        self.background.as_ref().map(BackgroundRenderer::state)
    }
}
