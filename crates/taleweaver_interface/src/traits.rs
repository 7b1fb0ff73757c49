//! Trait definitions for inference backends.

use crate::StreamChunk;
use async_trait::async_trait;
use futures_util::stream::Stream;
use std::pin::Pin;
use taleweaver_core::GenerateRequest;
use taleweaver_error::TaleweaverResult;

/// Ordered stream of text deltas. The stream ending is the end-of-reply signal.
pub type ChunkStream = Pin<Box<dyn Stream<Item = TaleweaverResult<StreamChunk>> + Send>>;

/// Identity every backend exposes.
pub trait StoryDriver: Send + Sync {
    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "HuggingFaceH4/zephyr-7b-beta").
    fn model_name(&self) -> &str;
}

/// Backends that stream their replies.
#[async_trait]
pub trait Streaming: StoryDriver {
    /// Start a streaming reply.
    ///
    /// Errors before the first byte (credential, transport, status) are
    /// returned directly; errors after that arrive as stream items.
    async fn generate_stream(&self, req: &GenerateRequest) -> TaleweaverResult<ChunkStream>;
}
