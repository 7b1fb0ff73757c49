//! Layered settings for the `taleweaver` binary.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from taleweaver.toml)
//! - `~/.config/taleweaver/taleweaver.toml`
//! - `./taleweaver.toml`

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taleweaver_core::{CharacterTemplate, Locale, SamplingParams, StoryConfig, Style, Theme};
use taleweaver_error::{ConfigError, TaleweaverError, TaleweaverResult};
use taleweaver_models::GatewayConfig;
use tracing::{debug, instrument};

/// Bundled default configuration.
pub const DEFAULT_SETTINGS: &str = include_str!("../../../taleweaver.toml");

/// Initial story choices.
///
/// # Example
///
/// ```toml
/// [story]
/// style = "mystery"
/// theme = "historical"
/// character = "detective"
/// locale = "en"
/// stories_dir = "stories"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySettings {
    /// Narrative style
    #[serde(default)]
    pub style: Style,
    /// Narrative theme
    #[serde(default)]
    pub theme: Theme,
    /// Character template
    #[serde(default)]
    pub character: CharacterTemplate,
    /// Free-text description replacing the template text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_description: Option<String>,
    /// Language of prompts and labels
    #[serde(default)]
    pub locale: Locale,
    /// Where saved stories are written
    #[serde(default = "default_stories_dir")]
    pub stories_dir: PathBuf,
}

fn default_stories_dir() -> PathBuf {
    PathBuf::from("stories")
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            style: Style::default(),
            theme: Theme::default(),
            character: CharacterTemplate::default(),
            character_description: None,
            locale: Locale::default(),
            stories_dir: default_stories_dir(),
        }
    }
}

impl StorySettings {
    /// Story config with the template text, or the free-text description if set.
    pub fn story_config(&self) -> StoryConfig {
        match self.character_description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                StoryConfig::new(self.style, self.theme, description)
            }
            _ => StoryConfig::from_template(self.style, self.theme, self.character, self.locale),
        }
    }
}

/// Everything the binary reads from configuration files.
///
/// # Example
///
/// ```no_run
/// use taleweaver::TaleweaverSettings;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = TaleweaverSettings::load()?;
/// println!("model: {}", settings.gateway.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaleweaverSettings {
    /// Inference gateway endpoint
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Initial sampling parameters
    #[serde(default)]
    pub sampling: SamplingParams,
    /// Initial story choices
    #[serde(default)]
    pub story: StorySettings,
}

impl TaleweaverSettings {
    /// Load settings with precedence: current dir > home dir > bundled defaults.
    ///
    /// User files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a file cannot be parsed or a sampling value
    /// is out of range.
    #[instrument]
    pub fn load() -> TaleweaverResult<Self> {
        debug!("Loading settings with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/taleweaver/taleweaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("taleweaver").required(false));

        Self::finish(builder.build().map_err(|e| {
            TaleweaverError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?)
    }

    /// Load bundled defaults overridden by one specific file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file is missing or invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TaleweaverResult<Self> {
        debug!("Loading settings from file");

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                TaleweaverError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;
        Self::finish(config)
    }

    fn finish(config: Config) -> TaleweaverResult<Self> {
        let settings: Self = config.try_deserialize().map_err(|e| {
            TaleweaverError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })?;
        settings.sampling.validate().map_err(|e| {
            TaleweaverError::from(ConfigError::new(format!(
                "Invalid [sampling] settings: {}",
                e.description()
            )))
        })?;
        debug!(
            model = %settings.gateway.model,
            locale = settings.story.locale.as_ref(),
            "Settings loaded"
        );
        Ok(settings)
    }
}
