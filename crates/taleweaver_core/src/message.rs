//! Message types for the model-facing conversation.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in the conversation sent to the gateway.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{Message, Role};
///
/// let message = Message::user("A storm approaches the harbor.");
///
/// assert_eq!(message.role, Role::User);
/// assert!(message.content.contains("harbor"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the message
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
