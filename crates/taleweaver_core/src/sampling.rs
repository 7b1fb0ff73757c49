//! Sampling parameters forwarded to the inference gateway.

use serde::{Deserialize, Serialize};
use taleweaver_error::{StoryError, StoryErrorKind, TaleweaverResult};

/// Allowed temperature range, inclusive.
pub const TEMPERATURE_RANGE: (f32, f32) = (0.1, 2.0);
/// Allowed max-token range, inclusive.
pub const MAX_TOKENS_RANGE: (u32, u32) = (64, 1024);
/// Allowed nucleus sampling range, inclusive.
pub const TOP_P_RANGE: (f32, f32) = (0.1, 1.0);

/// Sampling knobs the reader can adjust between turns.
///
/// Values are validated on construction and then passed through unmodified
/// on every gateway call.
///
/// # Examples
///
/// ```
/// use taleweaver_core::SamplingParams;
///
/// let params = SamplingParams::new(0.9, 256, 0.8).unwrap();
/// assert_eq!(*params.max_tokens(), 256);
///
/// let defaults = SamplingParams::default();
/// assert_eq!(*defaults.temperature(), 0.7);
///
/// assert!(SamplingParams::new(3.0, 256, 0.8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct SamplingParams {
    /// Creativity; higher values trade coherence for surprise.
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Upper bound on generated tokens per turn.
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,

    /// Nucleus sampling cutoff.
    #[serde(default = "default_top_p")]
    top_p: f32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    512
}

fn default_top_p() -> f32 {
    0.95
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}

impl SamplingParams {
    /// Creates validated sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::InvalidSampling` if any value is out of range.
    #[track_caller]
    pub fn new(temperature: f32, max_tokens: u32, top_p: f32) -> TaleweaverResult<Self> {
        let params = Self {
            temperature,
            max_tokens,
            top_p,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its allowed range.
    ///
    /// Deserialized values bypass [`SamplingParams::new`], so loaders call this.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::InvalidSampling` naming the first bad field.
    #[track_caller]
    pub fn validate(&self) -> TaleweaverResult<()> {
        let (t_min, t_max) = TEMPERATURE_RANGE;
        if !(t_min..=t_max).contains(&self.temperature) {
            return Err(invalid(
                "temperature",
                format!("must be in [{}, {}], got {}", t_min, t_max, self.temperature),
            ));
        }
        let (m_min, m_max) = MAX_TOKENS_RANGE;
        if !(m_min..=m_max).contains(&self.max_tokens) {
            return Err(invalid(
                "max_tokens",
                format!("must be in [{}, {}], got {}", m_min, m_max, self.max_tokens),
            ));
        }
        let (p_min, p_max) = TOP_P_RANGE;
        if !(p_min..=p_max).contains(&self.top_p) {
            return Err(invalid(
                "top_p",
                format!("must be in [{}, {}], got {}", p_min, p_max, self.top_p),
            ));
        }
        Ok(())
    }

    /// Returns a copy with a new temperature.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range.
    pub fn with_temperature(self, temperature: f32) -> TaleweaverResult<Self> {
        Self::new(temperature, self.max_tokens, self.top_p)
    }

    /// Returns a copy with a new token cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range.
    pub fn with_max_tokens(self, max_tokens: u32) -> TaleweaverResult<Self> {
        Self::new(self.temperature, max_tokens, self.top_p)
    }

    /// Returns a copy with a new nucleus cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range.
    pub fn with_top_p(self, top_p: f32) -> TaleweaverResult<Self> {
        Self::new(self.temperature, self.max_tokens, top_p)
    }
}

#[track_caller]
fn invalid(field: &str, reason: String) -> taleweaver_error::TaleweaverError {
    StoryError::new(StoryErrorKind::InvalidSampling {
        field: field.to_string(),
        reason,
    })
    .into()
}
