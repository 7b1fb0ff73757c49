//! Story protocol error types.

/// Specific error conditions for story sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// A turn is still waiting for its reply
    #[display("A turn is already in progress")]
    TurnInProgress,
    /// Completion requested with no open turn
    #[display("No open turn to complete")]
    NoOpenTurn,
    /// Unrecognized narrative style name
    #[display("Unknown style: {}", _0)]
    UnknownStyle(String),
    /// Unrecognized narrative theme name
    #[display("Unknown theme: {}", _0)]
    UnknownTheme(String),
    /// Unrecognized character template name
    #[display("Unknown character template: {}", _0)]
    UnknownCharacter(String),
    /// Unrecognized locale name
    #[display("Unknown locale: {}", _0)]
    UnknownLocale(String),
    /// Sampling parameter outside its allowed range
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidSampling {
        /// The parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Error type for story operations.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::TurnInProgress);
/// assert!(format!("{}", err).contains("already in progress"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
