//! The converter panel: document text, target filename, and the three actions.

use crate::converter::clipboard::ClipboardReader;
use crate::converter::field::TextField;
use crate::converter::messages::Messages;
use crate::converter::notify::{Notification, ToastQueue};
use crate::converter::saver::{DownloadPayload, FileSaver};
use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Name used when the filename field is blank.
pub const DEFAULT_FILENAME: &str = "myfile.txt";

/// Which input receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Text,
    Filename,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Text => Field::Filename,
            Field::Filename => Field::Text,
        }
    }
}

/// Result of a download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The saver accepted the payload
    Saved { filename: String, path: PathBuf },
    /// Text was empty after trimming; nothing was saved
    NothingToSave,
    /// The saver rejected the payload
    Failed { filename: String },
}

/// Trimmed filename, or [`DEFAULT_FILENAME`] if nothing is left.
pub fn resolve_filename(filename: &str) -> String {
    let trimmed = filename.trim();
    if trimmed.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Single-screen editor and exporter for plain text.
pub struct ConverterPanel {
    text: TextField,
    filename: TextField,
    focus: Field,
    clipboard: Arc<dyn ClipboardReader>,
    saver: Box<dyn FileSaver>,
    messages: Messages,
    toasts: ToastQueue,
}

impl ConverterPanel {
    pub fn new(
        clipboard: Arc<dyn ClipboardReader>,
        saver: Box<dyn FileSaver>,
        messages: Messages,
        toasts: ToastQueue,
    ) -> Self {
        Self {
            text: TextField::new(),
            filename: TextField::new(),
            focus: Field::Text,
            clipboard,
            saver,
            messages,
            toasts,
        }
    }

    pub fn text(&self) -> &str {
        self.text.value()
    }

    pub fn filename(&self) -> &str {
        self.filename.value()
    }

    pub fn text_field(&self) -> &TextField {
        &self.text
    }

    pub fn filename_field(&self) -> &TextField {
        &self.filename
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    /// Shared handle to the clipboard, for reads that run off the UI task
    pub fn clipboard(&self) -> Arc<dyn ClipboardReader> {
        Arc::clone(&self.clipboard)
    }

    /// Read the clipboard and apply the outcome. Returns true if the text was replaced.
    pub async fn paste(&mut self) -> bool {
        let result = self.clipboard.read_text().await;
        self.apply_clipboard(result)
    }

    /// Apply a finished clipboard read: all of it replaces the text, or nothing changes.
    pub fn apply_clipboard(&mut self, result: Result<String>) -> bool {
        match result {
            Ok(content) => {
                self.text.set(content);
                self.notify(Notification::normal(
                    &self.messages.paste_success_title,
                    &self.messages.paste_success_description,
                ));
                true
            }
            Err(err) => {
                log::warn!("failed to read clipboard contents: {}", err);
                self.notify(Notification::destructive(
                    &self.messages.paste_failed_title,
                    &self.messages.paste_failed_description,
                ));
                false
            }
        }
    }

    /// Reset both fields. Always succeeds.
    pub fn clear(&mut self) {
        self.text.clear();
        self.filename.clear();
        self.notify(Notification::normal(
            &self.messages.clear_title,
            &self.messages.clear_description,
        ));
    }

    /// Save the text under the resolved filename
    pub fn download(&mut self) -> DownloadOutcome {
        if self.text.value().trim().is_empty() {
            self.notify(Notification::destructive(
                &self.messages.empty_text_title,
                &self.messages.empty_text_description,
            ));
            return DownloadOutcome::NothingToSave;
        }

        let filename = resolve_filename(self.filename.value());
        let payload = DownloadPayload::text(filename.clone(), self.text.value());

        match self.saver.save(&payload) {
            Ok(path) => {
                let description = self.messages.download_success(&filename);
                self.notify(Notification::normal(
                    &self.messages.download_success_title,
                    description,
                ));
                DownloadOutcome::Saved { filename, path }
            }
            Err(err) => {
                log::error!("failed to save {}: {}", filename, err);
                let description = self.messages.download_failed(&filename);
                self.notify(Notification::destructive(
                    &self.messages.download_failed_title,
                    description,
                ));
                DownloadOutcome::Failed { filename }
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.focused_mut().insert_char(ch);
    }

    /// Insert a run of text; the filename field keeps only the first line
    pub fn insert_str(&mut self, text: &str) {
        match self.focus {
            Field::Text => self.text.insert_str(text),
            Field::Filename => {
                let first_line = text.lines().next().unwrap_or("");
                self.filename.insert_str(first_line);
            }
        }
    }

    /// Newline in the text field. The filename field is single-line and ignores it.
    pub fn insert_newline(&mut self) {
        if self.focus == Field::Text {
            self.text.insert_char('\n');
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().backspace();
    }

    pub fn delete(&mut self) {
        self.focused_mut().delete();
    }

    pub fn move_left(&mut self) {
        self.focused_mut().move_left();
    }

    pub fn move_right(&mut self) {
        self.focused_mut().move_right();
    }

    pub fn move_home(&mut self) {
        self.focused_mut().move_home();
    }

    pub fn move_end(&mut self) {
        self.focused_mut().move_end();
    }

    fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            Field::Text => &mut self.text,
            Field::Filename => &mut self.filename,
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }
}
