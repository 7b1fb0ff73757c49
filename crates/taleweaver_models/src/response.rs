use serde::{Deserialize, Serialize};

/// Streaming chat completion chunk
///
/// Providers behind the router differ in which envelope fields they send, so
/// everything except `choices` is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatCompletionChunk {
    /// Unique identifier
    #[serde(default)]
    pub id: String,
    /// Object type (usually "chat.completion.chunk")
    #[serde(default)]
    pub object: String,
    /// Unix timestamp
    #[serde(default)]
    pub created: i64,
    /// Model used
    #[serde(default)]
    pub model: String,
    /// Delta choices; empty on usage-only chunks
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

/// A choice in a streaming chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct ChunkChoice {
    /// Index of this choice
    #[serde(default)]
    pub index: u32,
    /// Delta content
    #[serde(default)]
    pub delta: Delta,
    /// Finish reason (if complete)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Delta content in a streaming chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    /// Role (only in first chunk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Incremental content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Error envelope some providers emit as an SSE event instead of a chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamErrorBody {
    /// Either a plain message or an object with a `message` field; `null` on
    /// ordinary chunks that carry the field
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl StreamErrorBody {
    /// Human-readable message from the envelope.
    pub fn message(&self) -> String {
        match &self.error {
            None => String::new(),
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        }
    }
}
