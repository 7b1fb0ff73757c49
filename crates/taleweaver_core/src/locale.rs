//! Language used for prompts, labels and status messages.

use serde::{Deserialize, Serialize};
use taleweaver_error::{StoryError, StoryErrorKind};

/// Output language of a session.
///
/// Chinese is the default; English is offered as a localization.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// Simplified Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Locale {
    /// Parses a locale name such as `zh` or `en`.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::UnknownLocale` for unrecognized names.
    #[track_caller]
    pub fn from_name(name: &str) -> Result<Self, StoryError> {
        name.trim()
            .parse()
            .map_err(|_| StoryError::new(StoryErrorKind::UnknownLocale(name.to_string())))
    }
}
