//! Bearer credential for the hosted gateway.

use std::fmt;
use taleweaver_error::ConfigError;

/// Environment variable holding the Hugging Face access token.
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Secret access token, resolved once at startup.
///
/// `Debug` never prints the secret.
///
/// ```
/// use taleweaver_models::ApiToken;
///
/// let token = ApiToken::new("hf_secret");
/// assert_eq!(format!("{:?}", token), "ApiToken(***)");
/// assert_eq!(token.expose(), "hf_secret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps an already-resolved token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Reads the token from `HF_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the variable is unset or blank. Callers
    /// treat this as fatal before serving any turn.
    #[tracing::instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Validates a raw token value, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the value is missing or blank.
    ///
    /// ```
    /// use taleweaver_models::ApiToken;
    ///
    /// assert!(ApiToken::resolve(None).is_err());
    /// assert_eq!(ApiToken::resolve(Some(" hf_x ".into())).unwrap().expose(), "hf_x");
    /// ```
    #[track_caller]
    pub fn resolve(raw: Option<String>) -> Result<Self, ConfigError> {
        match raw {
            Some(token) if !token.trim().is_empty() => {
                tracing::debug!("Resolved gateway credential");
                Ok(Self(token.trim().to_string()))
            }
            Some(_) => Err(ConfigError::new(format!("{} is set but empty", TOKEN_ENV_VAR))),
            None => Err(ConfigError::new(format!("{} not set", TOKEN_ENV_VAR))),
        }
    }

    /// The raw secret, for the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}
