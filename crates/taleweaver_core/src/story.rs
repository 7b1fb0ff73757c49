//! Story settings chosen by the reader.

use crate::Locale;
use serde::{Deserialize, Serialize};
use taleweaver_error::{StoryError, StoryErrorKind};

/// Narrative style that sets the overall tone.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Style {
    /// Magic and myth
    #[default]
    Fantasy,
    /// Science fiction
    SciFi,
    /// Suspense and puzzles
    Mystery,
    /// Journeys and danger
    Adventure,
    /// Love stories
    Romance,
    /// Dread and the uncanny
    Horror,
}

impl Style {
    /// Display label in the given locale.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Style::Fantasy, Locale::Zh) => "奇幻",
            (Style::SciFi, Locale::Zh) => "科幻",
            (Style::Mystery, Locale::Zh) => "悬疑",
            (Style::Adventure, Locale::Zh) => "冒险",
            (Style::Romance, Locale::Zh) => "爱情",
            (Style::Horror, Locale::Zh) => "恐怖",
            (Style::Fantasy, Locale::En) => "fantasy",
            (Style::SciFi, Locale::En) => "sci-fi",
            (Style::Mystery, Locale::En) => "mystery",
            (Style::Adventure, Locale::En) => "adventure",
            (Style::Romance, Locale::En) => "romance",
            (Style::Horror, Locale::En) => "horror",
        }
    }

    /// Parses a style name such as `sci-fi`.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::UnknownStyle` for unrecognized names.
    #[track_caller]
    pub fn from_name(name: &str) -> Result<Self, StoryError> {
        name.trim()
            .parse()
            .map_err(|_| StoryError::new(StoryErrorKind::UnknownStyle(name.to_string())))
    }
}

/// Theme the story should dwell on.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Theme {
    /// Quests and exploration
    #[default]
    Adventure,
    /// Secrets waiting to be uncovered
    Mystery,
    /// Relationships
    Romance,
    /// Past eras
    Historical,
    /// Ordinary life
    Everyday,
    /// Fairy tales
    Fairytale,
}

impl Theme {
    /// Display label in the given locale.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Theme::Adventure, Locale::Zh) => "冒险",
            (Theme::Mystery, Locale::Zh) => "神秘",
            (Theme::Romance, Locale::Zh) => "浪漫",
            (Theme::Historical, Locale::Zh) => "历史",
            (Theme::Everyday, Locale::Zh) => "日常",
            (Theme::Fairytale, Locale::Zh) => "童话",
            (Theme::Adventure, Locale::En) => "adventure",
            (Theme::Mystery, Locale::En) => "mystery",
            (Theme::Romance, Locale::En) => "romance",
            (Theme::Historical, Locale::En) => "historical",
            (Theme::Everyday, Locale::En) => "everyday",
            (Theme::Fairytale, Locale::En) => "fairytale",
        }
    }

    /// Parses a theme name such as `fairytale`.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::UnknownTheme` for unrecognized names.
    #[track_caller]
    pub fn from_name(name: &str) -> Result<Self, StoryError> {
        name.trim()
            .parse()
            .map_err(|_| StoryError::new(StoryErrorKind::UnknownTheme(name.to_string())))
    }
}

/// Canned protagonist descriptions the reader can start from.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CharacterTemplate {
    /// Brave explorer
    #[default]
    Adventurer,
    /// Observant investigator
    Detective,
    /// Creative soul
    Artist,
    /// Curious researcher
    Scientist,
    /// Plain person with a rich inner life
    OrdinaryPerson,
}

impl CharacterTemplate {
    /// Short name in the given locale.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CharacterTemplate::Adventurer, Locale::Zh) => "冒险家",
            (CharacterTemplate::Detective, Locale::Zh) => "侦探",
            (CharacterTemplate::Artist, Locale::Zh) => "艺术家",
            (CharacterTemplate::Scientist, Locale::Zh) => "科学家",
            (CharacterTemplate::OrdinaryPerson, Locale::Zh) => "普通人",
            (CharacterTemplate::Adventurer, Locale::En) => "adventurer",
            (CharacterTemplate::Detective, Locale::En) => "detective",
            (CharacterTemplate::Artist, Locale::En) => "artist",
            (CharacterTemplate::Scientist, Locale::En) => "scientist",
            (CharacterTemplate::OrdinaryPerson, Locale::En) => "ordinary person",
        }
    }

    /// Canned character description in the given locale.
    pub fn description(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CharacterTemplate::Adventurer, Locale::Zh) => {
                "一个勇敢无畏的探险家，热爱冒险与挑战。"
            }
            (CharacterTemplate::Detective, Locale::Zh) => "一个敏锐细心的侦探，善于观察和推理。",
            (CharacterTemplate::Artist, Locale::Zh) => {
                "一个富有创造力的艺术家，对美有独特的见解。"
            }
            (CharacterTemplate::Scientist, Locale::Zh) => {
                "一个求知若渴的科学家，致力于探索未知。"
            }
            (CharacterTemplate::OrdinaryPerson, Locale::Zh) => "一个平凡但内心丰富的普通人。",
            (CharacterTemplate::Adventurer, Locale::En) => {
                "A brave and fearless explorer who loves adventure and challenge."
            }
            (CharacterTemplate::Detective, Locale::En) => {
                "A sharp, meticulous detective skilled at observation and deduction."
            }
            (CharacterTemplate::Artist, Locale::En) => {
                "A creative artist with a distinctive eye for beauty."
            }
            (CharacterTemplate::Scientist, Locale::En) => {
                "A scientist hungry for knowledge, devoted to exploring the unknown."
            }
            (CharacterTemplate::OrdinaryPerson, Locale::En) => {
                "An ordinary person with a rich inner world."
            }
        }
    }

    /// Parses a template name such as `ordinary-person`.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::UnknownCharacter` for unrecognized names.
    #[track_caller]
    pub fn from_name(name: &str) -> Result<Self, StoryError> {
        name.trim()
            .parse()
            .map_err(|_| StoryError::new(StoryErrorKind::UnknownCharacter(name.to_string())))
    }
}

/// Style, theme and protagonist for a session.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{CharacterTemplate, Locale, StoryConfig, Style, Theme};
///
/// let config = StoryConfig::new(Style::Fantasy, Theme::Adventure, "a fearless explorer");
/// assert_eq!(config.character_description(), "a fearless explorer");
///
/// let templated = StoryConfig::from_template(
///     Style::Mystery,
///     Theme::Historical,
///     CharacterTemplate::Detective,
///     Locale::En,
/// );
/// assert!(templated.character_description().contains("detective"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryConfig {
    /// Narrative style
    style: Style,
    /// Narrative theme
    theme: Theme,
    /// Free-text protagonist description
    character_description: String,
}

impl StoryConfig {
    /// Creates a config with a free-text character description.
    pub fn new(style: Style, theme: Theme, character_description: impl Into<String>) -> Self {
        Self {
            style,
            theme,
            character_description: character_description.into(),
        }
    }

    /// Creates a config whose description comes from a template.
    pub fn from_template(
        style: Style,
        theme: Theme,
        template: CharacterTemplate,
        locale: Locale,
    ) -> Self {
        Self::new(style, theme, template.description(locale))
    }

    /// Replaces the narrative style.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Replaces the narrative theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replaces the character description with free text.
    pub fn set_character_description(&mut self, description: impl Into<String>) {
        self.character_description = description.into();
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::from_template(
            Style::default(),
            Theme::default(),
            CharacterTemplate::default(),
            Locale::default(),
        )
    }
}
