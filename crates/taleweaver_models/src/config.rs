//! Gateway endpoint configuration

use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible base URL of the Hugging Face inference router.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";

/// Where the gateway lives and which model it should run.
///
/// The credential is deliberately not part of this struct; see [`crate::ApiToken`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the chat-completions API (e.g., "https://router.huggingface.co/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier to use for inference
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

impl GatewayConfig {
    /// Create a new gateway configuration
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Full URL of the chat-completions endpoint.
    ///
    /// ```
    /// use taleweaver_models::GatewayConfig;
    ///
    /// let config = GatewayConfig::new("http://localhost:8080/v1/", "tiny");
    /// assert_eq!(config.chat_completions_url(), "http://localhost:8080/v1/chat/completions");
    /// ```
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
