use std::sync::{Arc, Mutex};

use textdrop::background::{
    BackgroundRenderer, FrameClock, FrameId, FrameScheduler, GraphicsDevice, RenderTarget,
    RendererState, TerminalSurface, Viewport,
};
use textdrop::{Result, TextDropError};

/// Scheduler that records outstanding requests
#[derive(Clone, Default)]
struct RecordingScheduler {
    outstanding: Arc<Mutex<Vec<FrameId>>>,
    next: Arc<Mutex<u64>>,
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) -> FrameId {
        let mut next = self.next.lock().unwrap();
        let id = FrameId(*next);
        *next += 1;
        self.outstanding.lock().unwrap().push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.outstanding.lock().unwrap().retain(|pending| *pending != id);
    }
}

struct NoGraphics;

impl GraphicsDevice for NoGraphics {
    fn create_target(&mut self, _viewport: Viewport) -> Result<Box<dyn RenderTarget>> {
        Err(TextDropError::graphics("graphics context unavailable"))
    }
}

#[test]
fn no_frame_is_outstanding_after_unmount() {
    let surface = TerminalSurface::new();
    let scheduler = RecordingScheduler::default();
    let mut renderer =
        BackgroundRenderer::new(Box::new(surface.clone()), Box::new(scheduler.clone()), 0.5);

    renderer.mount(Viewport::new(80, 24)).unwrap();
    for _ in 0..10 {
        let due = renderer.pending_frame().unwrap();
        assert!(renderer.on_frame(due));
    }
    assert_eq!(renderer.frames_rendered(), 10);
    assert_eq!(surface.present_count(), 10);

    assert!(renderer.unmount());
    assert!(scheduler.outstanding.lock().unwrap().is_empty());
    assert!(!surface.is_attached());
    assert_eq!(surface.release_count(), 1);

    // Late callbacks and repeated teardown are no-ops
    assert!(!renderer.on_frame(FrameId(10)));
    assert!(!renderer.unmount());
    assert_eq!(surface.present_count(), 10);
    assert_eq!(surface.release_count(), 1);
}

#[test]
fn rotation_accumulates_per_frame() {
    let surface = TerminalSurface::new();
    let clock = FrameClock::new();
    let mut renderer =
        BackgroundRenderer::new(Box::new(surface.clone()), Box::new(clock.clone()), 0.5);
    renderer.mount(Viewport::new(80, 24)).unwrap();

    for _ in 0..4 {
        let due = clock.take_due().unwrap();
        assert!(renderer.on_frame(due));
    }

    let (x, y) = renderer.scene().unwrap().mesh.rotation;
    assert!((x - 0.002).abs() < 1e-12);
    assert!((y - 0.002).abs() < 1e-12);
}

#[test]
fn resize_updates_camera_and_surface() {
    let surface = TerminalSurface::new();
    let mut renderer = BackgroundRenderer::new(
        Box::new(surface.clone()),
        Box::new(FrameClock::new()),
        0.5,
    );
    renderer.mount(Viewport::new(80, 40)).unwrap();
    assert!((renderer.scene().unwrap().camera.aspect - 1.0).abs() < 1e-12);

    assert!(renderer.resize(Viewport::new(160, 40)));
    assert!((renderer.scene().unwrap().camera.aspect - 2.0).abs() < 1e-12);
    assert_eq!(surface.snapshot().unwrap().viewport, Viewport::new(160, 40));

    // Same size again still reaches the target
    assert!(renderer.resize(Viewport::new(160, 40)));
}

#[test]
fn graphics_failure_marks_renderer_unavailable() {
    let clock = FrameClock::new();
    let mut renderer = BackgroundRenderer::new(Box::new(NoGraphics), Box::new(clock.clone()), 0.5);

    assert!(renderer.mount(Viewport::new(80, 24)).is_err());
    assert_eq!(renderer.state(), RendererState::Unavailable);
    assert!(!clock.has_pending());
    assert!(!renderer.unmount());
    assert_eq!(renderer.state(), RendererState::Disposed);
}

#[test]
fn dropping_a_running_renderer_releases_the_surface() {
    let surface = TerminalSurface::new();
    let clock = FrameClock::new();
    {
        let mut renderer =
            BackgroundRenderer::new(Box::new(surface.clone()), Box::new(clock.clone()), 0.5);
        renderer.mount(Viewport::new(80, 24)).unwrap();
        assert!(surface.is_attached());
    }
    assert!(!surface.is_attached());
    assert!(!clock.has_pending());
    assert_eq!(clock.cancelled_count(), 1);
}
