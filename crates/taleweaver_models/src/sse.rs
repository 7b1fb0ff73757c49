//! Server-Sent Events framing for chat-completion streams.

use crate::{ChatCompletionChunk, StreamErrorBody};
use async_stream::stream;
use futures_util::{Stream, StreamExt};
use std::fmt::Display;
use taleweaver_error::{GatewayError, GatewayErrorKind};

/// Sentinel payload that ends an OpenAI-style stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One decoded SSE event.
#[derive(Debug, Clone, PartialEq)]
pub enum SseEvent {
    /// A completion chunk
    Chunk(ChatCompletionChunk),
    /// The `[DONE]` sentinel
    Done,
}

/// Parses a byte stream of SSE frames into completion chunks.
///
/// Events may be split across network reads or packed several to a read.
/// The stream ends at `[DONE]` or when the body closes, whichever comes
/// first. Comment lines and events without `data` are skipped.
pub fn parse_sse_stream<S, B, E>(
    bytes: S,
) -> impl Stream<Item = Result<ChatCompletionChunk, GatewayError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send,
    E: Display + Send,
{
    stream! {
        let mut bytes = Box::pin(bytes);
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(read) = bytes.next().await {
            let read = match read {
                Ok(read) => read,
                Err(e) => {
                    tracing::error!(error = %e, "Stream read failed");
                    yield Err(GatewayError::new(GatewayErrorKind::Stream(e.to_string())));
                    return;
                }
            };
            buffer.extend(read.as_ref().iter().copied().filter(|b| *b != b'\r'));

            while let Some(pos) = find_event_boundary(&buffer) {
                let frame: Vec<u8> = buffer.drain(..pos + 2).collect();
                match decode_frame(&frame[..pos]) {
                    Ok(Some(SseEvent::Chunk(chunk))) => yield Ok(chunk),
                    Ok(Some(SseEvent::Done)) => {
                        tracing::debug!("Received end-of-stream sentinel");
                        return;
                    }
                    Ok(None) => {}
                    Err(e) => {
                        yield Err(e);
                        return;
                    }
                }
            }
        }

        // Body closed without a trailing blank line
        if !buffer.is_empty() {
            match decode_frame(&buffer) {
                Ok(Some(SseEvent::Chunk(chunk))) => yield Ok(chunk),
                Ok(Some(SseEvent::Done)) | Ok(None) => {}
                Err(e) => yield Err(e),
            }
        }
    }
}

fn find_event_boundary(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|w| w == b"\n\n")
}

/// Decodes a single event frame (without its terminating blank line).
///
/// Returns `Ok(None)` for frames that carry no data.
pub fn decode_frame(frame: &[u8]) -> Result<Option<SseEvent>, GatewayError> {
    let text = std::str::from_utf8(frame).map_err(|e| {
        GatewayError::new(GatewayErrorKind::Stream(format!("Invalid UTF-8: {}", e)))
    })?;

    let data = text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|value| value.strip_prefix(' ').unwrap_or(value))
        .collect::<Vec<_>>()
        .join("\n");

    if data.trim().is_empty() {
        return Ok(None);
    }
    if data.trim() == DONE_SENTINEL {
        return Ok(Some(SseEvent::Done));
    }

    // Chunk fields are all optional, so the error envelope must be tried first.
    // Ordinary chunks may carry `"error": null`.
    match serde_json::from_str::<StreamErrorBody>(&data) {
        Ok(body) if body.error.is_some() => {
            tracing::error!(message = %body.message(), "Provider reported error mid-stream");
            return Err(GatewayError::new(GatewayErrorKind::Stream(body.message())));
        }
        _ => {}
    }

    serde_json::from_str::<ChatCompletionChunk>(&data)
        .map(|chunk| Some(SseEvent::Chunk(chunk)))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to parse stream event");
            GatewayError::new(GatewayErrorKind::Deserialization(format!(
                "Failed to parse chunk: {}",
                e
            )))
        })
}
