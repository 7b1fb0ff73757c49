//! Timestamped transcript files.

use chrono::{DateTime, Local};
use std::path::PathBuf;
use taleweaver_error::{StorageError, StorageErrorKind, TaleweaverResult};

/// File name prefix of every saved story.
pub const FILE_PREFIX: &str = "story_";

/// `chrono` format of the timestamp embedded in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory of saved stories.
///
/// The directory is created on first save, not on construction.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct TranscriptArchive {
    /// Where story files are written
    dir: PathBuf,
}

impl TranscriptArchive {
    /// Archive rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes `text` to a new file stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::EmptyTranscript` for blank text, and
    /// `DirectoryCreation`/`FileWrite` on I/O failure.
    pub fn save(&self, text: &str) -> TaleweaverResult<PathBuf> {
        self.save_at(text, Local::now())
    }

    /// Writes `text` to a file stamped with `timestamp`.
    ///
    /// An existing file with the same name is never overwritten; a numeric
    /// suffix is appended instead.
    #[tracing::instrument(skip(self, text), fields(dir = %self.dir.display(), bytes = text.len()))]
    pub fn save_at(&self, text: &str, timestamp: DateTime<Local>) -> TaleweaverResult<PathBuf> {
        if text.trim().is_empty() {
            tracing::debug!("Refusing to save empty transcript");
            return Err(StorageError::new(StorageErrorKind::EmptyTranscript).into());
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            tracing::error!(error = %e, "Failed to create story directory");
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.dir.display(),
                e
            )))
        })?;

        let path = self.unused_path(&timestamp.format(TIMESTAMP_FORMAT).to_string());
        std::fs::write(&path, text).map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to write story");
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), "Saved story");
        Ok(path)
    }

    fn unused_path(&self, stamp: &str) -> PathBuf {
        let first = self.dir.join(format!("{}{}.txt", FILE_PREFIX, stamp));
        if !first.exists() {
            return first;
        }
        (1..)
            .map(|n| self.dir.join(format!("{}{}_{}.txt", FILE_PREFIX, stamp, n)))
            .find(|candidate| !candidate.exists())
            .unwrap_or(first)
    }
}
