//! Trait definitions for the Taleweaver inference gateway.
//!
//! The story engine talks to a text-generation backend only through the
//! traits defined here, so the hosted client and test doubles are
//! interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ChunkStream, StoryDriver, Streaming};
pub use types::{FinishReason, StreamChunk, StreamChunkBuilder};
