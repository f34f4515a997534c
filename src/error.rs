//! Error types and handling infrastructure for textdrop.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary uses `anyhow` on top of it for context.
//!
//! Most failures a user can cause (an unreadable clipboard, an empty download, a
//! failed write) never leave the converter panel: they are turned into notifications.
//! The variants here are what the panel converts, plus the terminal and configuration
//! failures that do propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for textdrop operations.
#[derive(Error, Debug)]
pub enum TextDropError {
    /// The system clipboard could not be read as text
    #[error("Clipboard read failed: {message}")]
    Clipboard { message: String },

    /// Writing the downloaded file failed
    #[error("Saving {} failed: {message}", .path.display())]
    Save {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A render target could not be created or used
    #[error("Graphics unavailable: {message}")]
    Graphics { message: String },

    /// Configuration file could not be parsed or holds invalid values
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Generic I/O failure not tied to a saved file
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for textdrop operations.
pub type Result<T> = std::result::Result<T, TextDropError>;

impl TextDropError {
    /// Create a Clipboard error with a descriptive message
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Create a Save error for the given destination
    pub fn save(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = match source.kind() {
            std::io::ErrorKind::PermissionDenied => "permission denied".to_string(),
            std::io::ErrorKind::NotFound => "directory does not exist".to_string(),
            _ => source.to_string(),
        };
        Self::Save {
            path: path.into(),
            message,
            source,
        }
    }

    /// Create a Graphics error with a descriptive message
    pub fn graphics(message: impl Into<String>) -> Self {
        Self::Graphics {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

// Terminal setup and teardown surface plain io::Errors
impl From<std::io::Error> for TextDropError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            std::io::ErrorKind::NotFound => "Not found".to_string(),
            _ => "IO operation failed".to_string(),
        };
        Self::Io {
            message,
            source: err,
        }
    }
}

impl From<toml::de::Error> for TextDropError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}
