//! Generation request handed to a driver.

use crate::{Message, SamplingParams};
use serde::{Deserialize, Serialize};

/// Everything a driver needs for one streamed reply.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{GenerateRequest, Message, SamplingParams};
///
/// let request = GenerateRequest::new(
///     vec![Message::system("Tell stories."), Message::user("Begin.")],
///     SamplingParams::default(),
/// );
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.sampling().max_tokens(), 512);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateRequest {
    /// The conversation messages to send, in order
    messages: Vec<Message>,
    /// Sampling parameters, forwarded unmodified
    sampling: SamplingParams,
}

impl GenerateRequest {
    /// Create a new request.
    pub fn new(messages: Vec<Message>, sampling: SamplingParams) -> Self {
        Self { messages, sampling }
    }
}
