//! # textdrop - Text to File Converter
//!
//! A terminal page for turning pasted or typed text into a downloadable `.txt` file,
//! drawn over a slowly rotating wireframe icosahedron.
//!
//! ## Features
//!
//! - **Converter Panel**: Multi-line text area, file name field, paste/clear/download actions
//! - **Clipboard Paste**: System clipboard reads that never block the UI
//! - **Notifications**: Localized success and failure toasts (Khmer and English)
//! - **Animated Background**: Wireframe mesh projected through a perspective camera
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Command-line and file configuration
//! - [`converter`] - Panel state, clipboard, saving and notifications
//! - [`background`] - Scene, frame scheduling and the renderer lifecycle
//! - [`input`] - Terminal events to input actions
//! - [`render::ui`](crate::render::ui) - Terminal user interface components
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;

// Page content
pub mod background;
pub mod converter;

// Subsystems
pub mod input;
pub mod render;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, TextDropError};

// Public API surface for external usage
pub use app::{Application, Page};
pub use background::{BackgroundRenderer, RendererState, TerminalSurface};
pub use config::{AppConfig, Args};
pub use converter::{ConverterPanel, DownloadOutcome};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
