//! Turning an in-memory payload into a file on disk.
//!
//! The panel hands a [`DownloadPayload`] to whatever [`FileSaver`] it was built with and
//! never looks at the filesystem itself. [`DirectorySaver`] behaves like a browser's
//! download manager: it writes into one directory, makes the requested name safe for
//! the filesystem, and never overwrites an existing file.

use crate::converter::panel::DEFAULT_FILENAME;
use crate::error::{Result, TextDropError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// MIME type attached to every text download.
pub const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Upper bound on ` (n)` suffixes tried before giving up.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Named byte payload ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPayload {
    filename: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl DownloadPayload {
    /// Package text verbatim as UTF-8 plain text
    pub fn text(filename: impl Into<String>, text: &str) -> Self {
        Self {
            filename: filename.into(),
            mime: TEXT_MIME,
            bytes: text.as_bytes().to_vec(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime(&self) -> &str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// "Save these bytes under this name" primitive.
pub trait FileSaver: Send + Sync {
    /// Persist the payload, returning where it ended up
    fn save(&self, payload: &DownloadPayload) -> Result<PathBuf>;
}

/// Saves payloads into a fixed directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, payload: &DownloadPayload) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|err| TextDropError::save(self.dir.clone(), err))?;

        let name = sanitize_filename(payload.filename());
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.dir.join(numbered_name(&name, attempt));
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(TextDropError::save(path, err)),
            };

            file.write_all(payload.bytes())
                .and_then(|_| file.flush())
                .map_err(|err| TextDropError::save(path.clone(), err))?;
            log::info!(
                "saved {} bytes ({}) to {}",
                payload.bytes().len(),
                payload.mime(),
                path.display()
            );
            return Ok(path);
        }

        Err(TextDropError::save(
            self.dir.join(&name),
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "no free file name left",
            ),
        ))
    }
}

/// Make a user-supplied name usable as a single path component.
///
/// Separators, characters reserved on common filesystems, and control characters become
/// `_`. Names that are empty or made only of dots fall back to the default name.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();

    if cleaned.chars().all(|ch| ch == '.') {
        DEFAULT_FILENAME.to_string()
    } else {
        cleaned
    }
}

/// `report.txt` → `report (2).txt` for attempt 2; attempt 0 is the name itself
fn numbered_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{} ({}){}", &name[..dot], attempt, &name[dot..]),
        _ => format!("{} ({})", name, attempt),
    }
}
