use crate::{ApiToken, ChatCompletionChunk, ChatCompletionRequest, GatewayConfig, convert, sse};
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use taleweaver_core::GenerateRequest;
use taleweaver_error::{ConfigError, GatewayError, GatewayErrorKind, TaleweaverResult};
use taleweaver_interface::{ChunkStream, StoryDriver, Streaming};
use tracing::instrument;

/// Type alias for streaming responses
type ChatCompletionStream =
    Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, GatewayError>> + Send>>;

/// Client for the hosted Hugging Face chat-completion router
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    config: GatewayConfig,
    token: ApiToken,
    client: reqwest::Client,
}

impl HuggingFaceClient {
    /// Create a new client with an already-resolved credential
    #[instrument(skip(config, token), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: GatewayConfig, token: ApiToken) -> Self {
        tracing::debug!("Creating gateway client");
        Self {
            config,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose credential comes from `HF_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the variable is missing or blank.
    pub fn from_env(config: GatewayConfig) -> Result<Self, ConfigError> {
        let token = ApiToken::from_env()?;
        Ok(Self::new(config, token))
    }

    /// Get the gateway configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send a streaming chat completion request
    #[instrument(skip(self, request), fields(model = %request.model, messages = request.messages.len()))]
    pub async fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
    ) -> Result<ChatCompletionStream, GatewayError> {
        request.stream = Some(true);

        let url = self.config.chat_completions_url();
        tracing::debug!("Sending streaming chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .header("Accept", "text/event-stream")
            .bearer_auth(self.token.expose())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GatewayError::new(GatewayErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Gateway returned error");
            let kind = match status.as_u16() {
                401 | 403 => GatewayErrorKind::Authentication(format!(
                    "Gateway returned {}: {}",
                    status, body
                )),
                code => GatewayErrorKind::Api {
                    status: code,
                    message: body,
                },
            };
            return Err(GatewayError::new(kind));
        }

        tracing::debug!("Streaming request accepted, parsing SSE stream");
        Ok(Box::pin(sse::parse_sse_stream(response.bytes_stream())))
    }
}

impl StoryDriver for HuggingFaceClient {
    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[async_trait::async_trait]
impl Streaming for HuggingFaceClient {
    #[instrument(skip(self, req), fields(model = %self.config.model))]
    async fn generate_stream(&self, req: &GenerateRequest) -> TaleweaverResult<ChunkStream> {
        tracing::debug!("Starting stream generation");

        let chat_request = convert::to_chat_request(req, &self.config.model)?;
        let stream = self.chat_completion_stream(chat_request).await?;

        let converted = stream.map(|chunk_result| {
            chunk_result
                .map(convert::chunk_to_stream_chunk)
                .map_err(Into::into)
        });

        Ok(Box::pin(converted))
    }
}
