//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a message sent to the inference gateway.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(Role::System.wire_name(), "system");
/// assert_eq!(format!("{}", Role::Assistant), "Assistant");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed storytelling instructions
    System,
    /// Scene text typed by the reader
    User,
    /// Story text produced by the model
    Assistant,
}

impl Role {
    /// Lowercase role name used by chat-completion APIs.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
