//! Taleweaver - interactive fiction with a hosted language model
//!
//! The reader picks a narrative style, theme and protagonist, seeds a scene,
//! and the story is continued turn by turn. Every turn replays the whole
//! story so far to the model, so new text stays consistent with what has
//! already happened.
//!
//! # Architecture
//!
//! - `taleweaver_error` - Error types
//! - `taleweaver_core` - Messages, sampling parameters, story settings
//! - `taleweaver_interface` - `Streaming` driver trait
//! - `taleweaver_models` - Hugging Face chat-completions client
//! - `taleweaver_story` - Prompt assembly, transcript and turn protocol
//! - `taleweaver_storage` - Saved story files
//!
//! This crate re-exports the public surface and adds layered settings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{DEFAULT_SETTINGS, StorySettings, TaleweaverSettings};

pub use taleweaver_core::*;
pub use taleweaver_error::*;
pub use taleweaver_interface::*;
pub use taleweaver_models::{ApiToken, GatewayConfig, HuggingFaceClient, TOKEN_ENV_VAR};
pub use taleweaver_storage::TranscriptArchive;
pub use taleweaver_story::{
    PromptAssembler, StorySession, StorySessionBuilder, Transcript, Turn, TurnController,
    TurnOutcome, TurnUpdate,
};
