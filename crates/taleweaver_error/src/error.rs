//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError, StorageError, StoryError};

/// Every error family the workspace can raise.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{TaleweaverError, GatewayError, GatewayErrorKind};
///
/// let gateway_err = GatewayError::new(GatewayErrorKind::Http("connection refused".into()));
/// let err: TaleweaverError = gateway_err.into();
/// assert!(format!("{}", err).contains("HTTP request failed"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TaleweaverErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Inference gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Transcript archive error
    #[from(StorageError)]
    Storage(StorageError),
    /// Story protocol error
    #[from(StoryError)]
    Story(StoryError),
}

/// Taleweaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{ConfigError, TaleweaverResult};
///
/// fn might_fail() -> TaleweaverResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Taleweaver Error: {}", _0)]
pub struct TaleweaverError(Box<TaleweaverErrorKind>);

impl TaleweaverError {
    /// Create a new error from a kind.
    pub fn new(kind: TaleweaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TaleweaverErrorKind {
        &self.0
    }

    /// The error message without source location, suitable for showing to a reader.
    ///
    /// ```
    /// use taleweaver_error::{GatewayError, GatewayErrorKind, TaleweaverError};
    ///
    /// let err = TaleweaverError::from(GatewayError::new(GatewayErrorKind::Stream("reset".into())));
    /// assert_eq!(err.description(), "Stream error: reset");
    /// ```
    pub fn description(&self) -> String {
        match self.kind() {
            TaleweaverErrorKind::Config(e) => e.message.clone(),
            TaleweaverErrorKind::Gateway(e) => e.kind.to_string(),
            TaleweaverErrorKind::Storage(e) => e.kind.to_string(),
            TaleweaverErrorKind::Story(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to TaleweaverErrorKind
impl<T> From<T> for TaleweaverError
where
    T: Into<TaleweaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Taleweaver operations.
pub type TaleweaverResult<T> = std::result::Result<T, TaleweaverError>;
