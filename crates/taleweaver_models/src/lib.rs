//! Inference gateway client for Taleweaver.
//!
//! Talks to any OpenAI-compatible chat-completions endpoint over HTTPS with
//! streaming enabled. The default target is the Hugging Face inference
//! router, authenticated by the `HF_TOKEN` bearer credential.
//!
//! # Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use taleweaver_core::{GenerateRequest, Message, SamplingParams};
//! use taleweaver_interface::Streaming;
//! use taleweaver_models::{GatewayConfig, HuggingFaceClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HuggingFaceClient::from_env(GatewayConfig::default())?;
//! let request = GenerateRequest::new(
//!     vec![Message::system("You tell stories."), Message::user("Begin at the harbor.")],
//!     SamplingParams::default(),
//! );
//!
//! let mut stream = client.generate_stream(&request).await?;
//! while let Some(chunk) = stream.next().await {
//!     print!("{}", chunk?.text());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
pub mod convert;
mod credential;
mod request;
mod response;
pub mod sse;

pub use client::HuggingFaceClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GatewayConfig};
pub use credential::{ApiToken, TOKEN_ENV_VAR};
pub use request::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionRequestBuilderError,
    ChatMessage,
};
pub use response::{ChatCompletionChunk, ChunkChoice, Delta, StreamErrorBody};
