//! Animated backdrop subsystem.
//!
//! A rotating wireframe icosahedron drawn behind the converter panel. It reads nothing
//! from the panel and produces nothing the panel uses; it only owns a frame loop, a
//! render target, and a reaction to viewport resizes.

pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod scheduler;
pub mod surface;

pub use geometry::{Vec3, WireframeGeometry};
pub use renderer::{BackgroundRenderer, RendererState};
pub use scene::{RenderedFrame, Rgba, Scene, Segment};
pub use scheduler::{FrameClock, FrameId, FrameScheduler};
pub use surface::{GraphicsDevice, RenderTarget, SurfaceSnapshot, TerminalSurface, Viewport};
