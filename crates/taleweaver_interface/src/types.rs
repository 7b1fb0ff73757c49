//! Core type definitions for the Taleweaver interface.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single text delta from a streaming response.
///
/// # Examples
///
/// ```
/// use taleweaver_interface::{FinishReason, StreamChunk};
///
/// let chunk = StreamChunk::builder()
///     .text("Once upon a time")
///     .is_final(true)
///     .finish_reason(Some(FinishReason::Stop))
///     .build()
///     .unwrap();
///
/// assert_eq!(chunk.text(), "Once upon a time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StreamChunk {
    /// Incremental text; may be empty for role-only or final chunks.
    #[builder(default)]
    text: String,
    /// Whether the provider marked this as the last chunk.
    #[builder(default)]
    is_final: bool,
    /// Optional finish reason if final.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    finish_reason: Option<FinishReason>,
}

impl StreamChunk {
    /// Creates a new builder for `StreamChunk`.
    pub fn builder() -> StreamChunkBuilder {
        StreamChunkBuilder::default()
    }

    /// Chunk that is final exactly when a finish reason is present.
    pub fn new(text: impl Into<String>, finish_reason: Option<FinishReason>) -> Self {
        Self {
            text: text.into(),
            is_final: finish_reason.is_some(),
            finish_reason,
        }
    }

    /// Non-final chunk carrying only text.
    pub fn delta(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
            finish_reason: None,
        }
    }
}

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Content was filtered.
    ContentFilter,
    /// Other/unknown reason.
    Other,
}

impl FinishReason {
    /// Maps an OpenAI-style finish reason string.
    pub fn from_wire(reason: &str) -> Self {
        match reason {
            "stop" | "eos_token" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            _ => FinishReason::Other,
        }
    }
}
