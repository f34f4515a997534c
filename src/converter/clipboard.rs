//! Clipboard access behind an injectable capability.

use crate::error::{Result, TextDropError};
use async_trait::async_trait;

/// Read-only access to a clipboard's text content.
///
/// Reading may wait on the platform (clipboard owners answer asynchronously on X11 and
/// Wayland) and may fail, for instance when the clipboard holds an image.
#[async_trait]
pub trait ClipboardReader: Send + Sync {
    async fn read_text(&self) -> Result<String>;
}

/// The operating system clipboard, accessed through `arboard`.
///
/// `arboard::Clipboard` is created per read and never stored: it is not `Send` on every
/// platform, and holding one open keeps a connection to the display server alive.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn read_blocking() -> Result<String> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| TextDropError::clipboard(format!("cannot open clipboard: {}", err)))?;
        clipboard.get_text().map_err(|err| match err {
            arboard::Error::ContentNotAvailable => {
                TextDropError::clipboard("clipboard holds no text")
            }
            other => TextDropError::clipboard(other.to_string()),
        })
    }
}

#[async_trait]
impl ClipboardReader for SystemClipboard {
    async fn read_text(&self) -> Result<String> {
        tokio::task::spawn_blocking(Self::read_blocking)
            .await
            .map_err(|err| TextDropError::clipboard(format!("clipboard task failed: {}", err)))?
    }
}
