//! Error types for the inference gateway.

/// Error kinds for gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// The credential was rejected by the endpoint
    #[display("Authentication failed: {}", _0)]
    Authentication(String),

    /// HTTP request failed before a response arrived
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Endpoint answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error payload
        message: String,
    },

    /// Failed to deserialize a response or stream event
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// The token stream broke mid-way
    #[display("Stream error: {}", _0)]
    Stream(String),

    /// Failed to build a request
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The error kind
    pub kind: GatewayErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
