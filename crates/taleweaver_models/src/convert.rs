//! Conversion between Taleweaver and chat-completion API types

use taleweaver_core::{GenerateRequest, Message};
use taleweaver_error::{GatewayError, GatewayErrorKind};
use taleweaver_interface::{FinishReason, StreamChunk};

use crate::{ChatCompletionChunk, ChatCompletionRequest, ChatMessage, ChatCompletionRequestBuilder};

/// Convert a Taleweaver request to a streaming chat-completion request.
///
/// Sampling values pass through unmodified.
#[tracing::instrument(skip(request), fields(messages = request.messages().len()))]
pub fn to_chat_request(
    request: &GenerateRequest,
    model: &str,
) -> Result<ChatCompletionRequest, GatewayError> {
    if request.messages().is_empty() {
        return Err(GatewayError::new(GatewayErrorKind::InvalidRequest(
            "Request must contain at least one message".into(),
        )));
    }

    let messages = request
        .messages()
        .iter()
        .map(to_chat_message)
        .collect::<Vec<_>>();
    let sampling = request.sampling();

    ChatCompletionRequestBuilder::default()
        .model(model)
        .messages(messages)
        .max_tokens(Some(*sampling.max_tokens()))
        .temperature(Some(*sampling.temperature()))
        .top_p(Some(*sampling.top_p()))
        .stream(Some(true))
        .build()
        .map_err(|e| {
            GatewayError::new(GatewayErrorKind::InvalidRequest(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

fn to_chat_message(message: &Message) -> ChatMessage {
    ChatMessage::new(message.role.wire_name(), message.content.clone())
}

/// Convert a streaming chunk to a Taleweaver text delta.
///
/// Chunks without choices (usage reports, keep-alives) become empty deltas.
pub fn chunk_to_stream_chunk(chunk: ChatCompletionChunk) -> StreamChunk {
    let Some(choice) = chunk.choices.into_iter().next() else {
        return StreamChunk::delta("");
    };

    let finish_reason = choice.finish_reason.as_deref().map(FinishReason::from_wire);

    StreamChunk::new(choice.delta.content.unwrap_or_default(), finish_reason)
}
