//! Core data types for the Taleweaver interactive fiction engine.
//!
//! This crate provides the data types shared by the gateway client, the
//! story engine and the CLI: conversation messages, sampling parameters and
//! the reader's story settings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod locale;
mod message;
mod request;
mod role;
mod sampling;
mod story;

pub use locale::Locale;
pub use message::Message;
pub use request::GenerateRequest;
pub use role::Role;
pub use sampling::{MAX_TOKENS_RANGE, SamplingParams, TEMPERATURE_RANGE, TOP_P_RANGE};
pub use story::{CharacterTemplate, StoryConfig, Style, Theme};
