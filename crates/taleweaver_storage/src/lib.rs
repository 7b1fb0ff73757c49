//! Plain-text archive for finished stories.
//!
//! Serialized transcripts are written as UTF-8 files named after the local
//! time of the save, e.g. `story_20240315_142530.txt`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;

pub use archive::{FILE_PREFIX, TIMESTAMP_FORMAT, TranscriptArchive};
