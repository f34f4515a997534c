//! Lifecycle of the animated backdrop.
//!
//! ```text
//! Uninitialized --mount ok--> Running --unmount--> Disposed
//!       |                                             ^
//!       +--mount failed--> Unavailable --unmount------+
//! ```
//!
//! While running exactly one frame request is outstanding. Every delivered frame first
//! asks for the next one, then spins the mesh by a fixed step and presents it. Frames
//! are matched against the outstanding id, so anything delivered after unmount (or a
//! superseded request) is dropped without touching released resources.

use crate::background::scene::{Rgba, Scene};
use crate::background::scheduler::{FrameId, FrameScheduler};
use crate::background::surface::{GraphicsDevice, RenderTarget, Viewport};
use crate::error::{Result, TextDropError};

/// Where the renderer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Running,
    /// Setup failed; the page carries on without a backdrop
    Unavailable,
    Disposed,
}

/// Resources owned while running.
struct Mounted {
    scene: Scene,
    target: Box<dyn RenderTarget>,
    pending: FrameId,
}

/// Continuously animated wireframe backdrop.
pub struct BackgroundRenderer {
    state: RendererState,
    device: Box<dyn GraphicsDevice>,
    scheduler: Box<dyn FrameScheduler>,
    cell_aspect: f64,
    mounted: Option<Mounted>,
    frames_rendered: u64,
}

impl BackgroundRenderer {
    pub fn new(
        device: Box<dyn GraphicsDevice>,
        scheduler: Box<dyn FrameScheduler>,
        cell_aspect: f64,
    ) -> Self {
        Self {
            state: RendererState::Uninitialized,
            device,
            scheduler,
            cell_aspect,
            mounted: None,
            frames_rendered: 0,
        }
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// The outstanding frame request, if running
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.mounted.as_ref().map(|mounted| mounted.pending)
    }

    /// Current scene, if running
    pub fn scene(&self) -> Option<&Scene> {
        self.mounted.as_ref().map(|mounted| &mounted.scene)
    }

    /// Size the render target currently has, if running
    pub fn viewport(&self) -> Option<Viewport> {
        self.mounted.as_ref().map(|mounted| mounted.target.size())
    }

    /// Build the scene, acquire a render target and start the frame loop.
    ///
    /// On failure nothing stays acquired and the renderer becomes `Unavailable`.
    pub fn mount(&mut self, viewport: Viewport) -> Result<()> {
        if self.state != RendererState::Uninitialized {
            return Err(TextDropError::graphics(format!(
                "cannot mount a renderer that is {:?}",
                self.state
            )));
        }

        let scene = Scene::backdrop(viewport.aspect(self.cell_aspect));
        let mut target = match self.device.create_target(viewport) {
            Ok(target) => target,
            Err(err) => {
                self.state = RendererState::Unavailable;
                return Err(err);
            }
        };
        target.resize(viewport);
        target.set_clear_color(Rgba::TRANSPARENT);

        let pending = self.scheduler.request_frame();
        self.mounted = Some(Mounted {
            scene,
            target,
            pending,
        });
        self.state = RendererState::Running;
        log::debug!(
            "background mounted at {}x{}",
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    /// Frame callback. Returns true if the frame was rendered.
    pub fn on_frame(&mut self, id: FrameId) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        if mounted.pending != id {
            return false;
        }

        mounted.pending = self.scheduler.request_frame();
        mounted.scene.mesh.step();
        let frame = mounted.scene.render();
        mounted.target.present(frame);
        self.frames_rendered += 1;
        true
    }

    /// Follow a viewport change. Every call updates the camera and the target.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        mounted.scene.camera.aspect = viewport.aspect(self.cell_aspect);
        mounted.target.resize(viewport);
        true
    }

    /// Stop the loop and release everything. Returns true the one time teardown runs.
    pub fn unmount(&mut self) -> bool {
        match self.state {
            RendererState::Disposed => false,
            RendererState::Uninitialized | RendererState::Unavailable => {
                self.state = RendererState::Disposed;
                false
            }
            RendererState::Running => {
                if let Some(mut mounted) = self.mounted.take() {
                    self.scheduler.cancel_frame(mounted.pending);
                    mounted.target.release();
                    // Scene geometry and material go with `mounted`
                }
                self.state = RendererState::Disposed;
                log::debug!("background disposed after {} frames", self.frames_rendered);
                true
            }
        }
    }
}

impl Drop for BackgroundRenderer {
    fn drop(&mut self) {
        self.unmount();
    }
}
