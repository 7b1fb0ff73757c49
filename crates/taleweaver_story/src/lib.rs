//! Story engine for Taleweaver.
//!
//! Turns the reader's settings and scene text into model prompts, runs one
//! streamed exchange at a time against a [`Streaming`](taleweaver_interface::Streaming)
//! driver, and keeps the transcript of completed turns.
//!
//! # Example
//!
//! ```no_run
//! use taleweaver_story::{StorySession, TurnUpdate};
//! use taleweaver_storage::TranscriptArchive;
//! # use taleweaver_interface::Streaming;
//!
//! # async fn example<D: Streaming>(driver: D) {
//! let mut session = StorySession::builder(driver, TranscriptArchive::new("stories")).build();
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//!
//! session.submit("A storm approaches the harbor.", &tx).await.ok();
//! drop(tx);
//! while let Some(update) = rx.recv().await {
//!     if let TurnUpdate::Partial(text) = update {
//!         println!("{}", text);
//!     }
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod prompt;
mod session;
mod text;
mod transcript;

pub use controller::{TurnController, TurnOutcome, TurnUpdate};
pub use prompt::PromptAssembler;
pub use session::{StorySession, StorySessionBuilder};
pub use text::{apology, interrupted_notice, save_status};
pub use transcript::{Transcript, Turn};
