use async_trait::async_trait;
use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use textdrop::converter::{
    ClipboardReader, ConverterPanel, DirectorySaver, DownloadOutcome, DownloadPayload, Field,
    FileSaver, Messages, ToastQueue, TEXT_MIME,
};
use textdrop::{Result, TextDropError};

struct FixedClipboard(Option<String>);

#[async_trait]
impl ClipboardReader for FixedClipboard {
    async fn read_text(&self) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| TextDropError::clipboard("permission denied"))
    }
}

#[derive(Default, Clone)]
struct MemorySaver {
    saved: Arc<Mutex<Vec<DownloadPayload>>>,
}

impl FileSaver for MemorySaver {
    fn save(&self, payload: &DownloadPayload) -> Result<PathBuf> {
        self.saved.lock().unwrap().push(payload.clone());
        Ok(PathBuf::from(payload.filename()))
    }
}

fn panel_with(clipboard: Option<&str>, saver: Box<dyn FileSaver>) -> ConverterPanel {
    ConverterPanel::new(
        Arc::new(FixedClipboard(clipboard.map(str::to_string))),
        saver,
        Messages::english(),
        ToastQueue::default(),
    )
}

fn type_filename(panel: &mut ConverterPanel, name: &str) {
    panel.set_focus(Field::Filename);
    panel.insert_str(name);
    panel.set_focus(Field::Text);
}

#[tokio::test]
async fn paste_then_download_writes_the_clipboard_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut panel = panel_with(
        Some("សួស្តី\nhello"),
        Box::new(DirectorySaver::new(dir.path())),
    );

    assert!(panel.paste().await);
    type_filename(&mut panel, "  notes.txt  ");

    let outcome = panel.download();
    let DownloadOutcome::Saved { filename, path } = outcome else {
        panic!("expected a saved download, got {:?}", outcome);
    };
    assert_eq!(filename, "notes.txt");
    assert_eq!(path, dir.path().join("notes.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "សួស្តី\nhello");

    let toast = panel.toasts().latest().unwrap();
    assert_eq!(toast.title, "Downloaded");
    assert_eq!(toast.description, "File \"notes.txt\" was downloaded");
}

#[tokio::test]
async fn denied_clipboard_leaves_text_unchanged() {
    let saver = MemorySaver::default();
    let mut panel = panel_with(None, Box::new(saver.clone()));
    panel.insert_str("draft");

    assert!(!panel.paste().await);
    assert_eq!(panel.text(), "draft");
    assert!(panel.toasts().latest().unwrap().is_destructive());
    assert!(saver.saved.lock().unwrap().is_empty());
}

#[test]
fn blank_filename_uses_default_and_repeat_downloads_do_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let mut panel = panel_with(None, Box::new(DirectorySaver::new(dir.path())));
    panel.insert_str("body");
    type_filename(&mut panel, "   ");

    assert_eq!(
        panel.download(),
        DownloadOutcome::Saved {
            filename: "myfile.txt".to_string(),
            path: dir.path().join("myfile.txt"),
        }
    );
    assert_eq!(
        panel.download(),
        DownloadOutcome::Saved {
            filename: "myfile.txt".to_string(),
            path: dir.path().join("myfile (1).txt"),
        }
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("myfile (1).txt")).unwrap(),
        "body"
    );
}

#[test]
fn whitespace_only_text_is_not_saved() {
    let saver = MemorySaver::default();
    let mut panel = panel_with(None, Box::new(saver.clone()));
    panel.insert_str(" \n\t ");

    assert_eq!(panel.download(), DownloadOutcome::NothingToSave);
    assert!(saver.saved.lock().unwrap().is_empty());
    assert_eq!(panel.toasts().latest().unwrap().title, "No text");
}

#[test]
fn clear_then_download_saves_nothing() {
    let saver = MemorySaver::default();
    let mut panel = panel_with(None, Box::new(saver.clone()));
    panel.insert_str("content");
    type_filename(&mut panel, "a.txt");

    panel.clear();
    assert_eq!(panel.text(), "");
    assert_eq!(panel.filename(), "");
    assert_eq!(panel.download(), DownloadOutcome::NothingToSave);
    assert!(saver.saved.lock().unwrap().is_empty());
}

#[test]
fn unwritable_directory_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let mut panel = panel_with(None, Box::new(DirectorySaver::new(&blocker)));
    panel.insert_str("text");

    assert_eq!(
        panel.download(),
        DownloadOutcome::Failed {
            filename: "myfile.txt".to_string()
        }
    );
    let toast = panel.toasts().latest().unwrap();
    assert!(toast.is_destructive());
    assert_eq!(toast.title, "Download failed");
}

proptest! {
    #[test]
    fn downloaded_bytes_match_the_text(text in "\\PC*[a-zA-Z0-9]\\PC*") {
        let saver = MemorySaver::default();
        let mut panel = panel_with(None, Box::new(saver.clone()));
        panel.insert_str(&text);

        let outcome = panel.download();
        prop_assert!(
            matches!(outcome, DownloadOutcome::Saved { .. }),
            "unexpected outcome {:?}",
            outcome
        );

        let saved = saver.saved.lock().unwrap();
        prop_assert_eq!(saved.len(), 1);
        prop_assert_eq!(saved[0].bytes(), text.as_bytes());
        prop_assert_eq!(saved[0].mime(), TEXT_MIME);
        prop_assert_eq!(saved[0].filename(), "myfile.txt");
    }

    #[test]
    fn pasted_text_replaces_everything(before in "\\PC{0,40}", clip in "\\PC{0,40}") {
        let mut panel = panel_with(Some(clip.as_str()), Box::new(MemorySaver::default()));
        panel.insert_str(&before);

        prop_assert!(tokio_test::block_on(panel.paste()));
        prop_assert_eq!(panel.text(), clip.as_str());
    }
}
