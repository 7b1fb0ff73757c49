//! Configuration error types.

/// Configuration error with source location.
///
/// Raised for problems that must stop the process before any turn is served:
/// a missing credential, an unreadable settings file, or out-of-range
/// sampling parameters.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use taleweaver_error::ConfigError;
    ///
    /// let err = ConfigError::new("HF_TOKEN is not set");
    /// assert!(err.message.contains("HF_TOKEN"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
