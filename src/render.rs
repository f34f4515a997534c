//! Rendering subsystem.
//!
//! `service` turns input actions into page updates, `ui` draws the page to the terminal.

pub mod service;
pub mod ui;

pub use service::{ActionDispatcher, Effect};
