//! Converter panel subsystem.
//!
//! Owns the document text and target filename, and the three user actions on them:
//! paste from the clipboard, clear, and download. The clipboard and the file save are
//! injected capabilities so the panel logic never touches the platform directly.

pub mod clipboard;
pub mod field;
pub mod messages;
pub mod notify;
pub mod panel;
pub mod saver;

pub use clipboard::{ClipboardReader, SystemClipboard};
pub use field::TextField;
pub use messages::Messages;
pub use notify::{Notification, Severity, Toast, ToastQueue};
pub use panel::{resolve_filename, ConverterPanel, DownloadOutcome, Field, DEFAULT_FILENAME};
pub use saver::{DirectorySaver, DownloadPayload, FileSaver, TEXT_MIME};
