//! A reader's story session: settings, transcript and the turn controller.

use crate::text::save_status;
use crate::{Transcript, TurnController, TurnOutcome, TurnUpdate};
use taleweaver_core::{CharacterTemplate, Locale, SamplingParams, StoryConfig, Style, Theme};
use taleweaver_error::{StorageErrorKind, StoryError, StoryErrorKind, TaleweaverErrorKind};
use taleweaver_interface::Streaming;
use taleweaver_storage::TranscriptArchive;
use tokio::sync::mpsc::UnboundedSender;

/// Everything the presentation layer drives.
///
/// Settings may change between turns and only affect prompts assembled
/// afterwards; they are refused while a turn is open.
#[derive(Debug)]
pub struct StorySession<D: Streaming> {
    controller: TurnController<D>,
    transcript: Transcript,
    story: StoryConfig,
    sampling: SamplingParams,
    archive: TranscriptArchive,
}

/// Builder for [`StorySession`].
#[derive(Debug)]
pub struct StorySessionBuilder<D: Streaming> {
    driver: D,
    archive: TranscriptArchive,
    story: Option<StoryConfig>,
    sampling: SamplingParams,
    locale: Locale,
}

impl<D: Streaming> StorySessionBuilder<D> {
    /// Initial story settings. Defaults to the adventurer template in the session locale.
    pub fn story(mut self, story: StoryConfig) -> Self {
        self.story = Some(story);
        self
    }

    /// Initial sampling parameters.
    pub fn sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// Language of prompts, labels and status lines.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builds the session with an empty transcript.
    pub fn build(self) -> StorySession<D> {
        let story = self.story.unwrap_or_else(|| {
            StoryConfig::from_template(
                Style::default(),
                Theme::default(),
                CharacterTemplate::default(),
                self.locale,
            )
        });
        tracing::debug!(locale = self.locale.as_ref(), "Building story session");
        StorySession {
            controller: TurnController::new(self.driver, self.locale),
            transcript: Transcript::new(),
            story,
            sampling: self.sampling,
            archive: self.archive,
        }
    }
}

impl<D: Streaming> StorySession<D> {
    /// Starts building a session around a resolved driver.
    pub fn builder(driver: D, archive: TranscriptArchive) -> StorySessionBuilder<D> {
        StorySessionBuilder {
            driver,
            archive,
            story: None,
            sampling: SamplingParams::default(),
            locale: Locale::default(),
        }
    }

    /// Conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current story settings.
    pub fn story(&self) -> &StoryConfig {
        &self.story
    }

    /// Current sampling parameters.
    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }

    /// Session language.
    pub fn locale(&self) -> Locale {
        self.controller.locale()
    }

    /// Where saved stories go.
    pub fn archive(&self) -> &TranscriptArchive {
        &self.archive
    }

    /// The turn controller.
    pub fn controller(&self) -> &TurnController<D> {
        &self.controller
    }

    /// Runs one turn for `text`, streaming progress to `updates`.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is already open.
    pub async fn submit(
        &mut self,
        text: &str,
        updates: &UnboundedSender<TurnUpdate>,
    ) -> Result<TurnOutcome, StoryError> {
        self.controller
            .advance_turn(&mut self.transcript, &self.story, &self.sampling, text, updates)
            .await
    }

    /// Clears the conversation and the status line. Settings are kept.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is open.
    #[track_caller]
    pub fn reset(&mut self) -> Result<(), StoryError> {
        self.ensure_idle()?;
        self.transcript.reset();
        tracing::info!("Story reset");
        Ok(())
    }

    /// Writes the transcript to the archive and returns a status line.
    ///
    /// Never fails; the outcome is also stored as the transcript status.
    #[tracing::instrument(skip(self), fields(turns = self.transcript.len()))]
    pub fn save(&mut self) -> String {
        let locale = self.locale();
        let status = if self.transcript.is_empty() {
            save_status(locale, Ok(None))
        } else {
            match self.archive.save(&self.transcript.serialize(locale)) {
                Ok(path) => save_status(locale, Ok(Some(path.as_path()))),
                Err(e) => match e.kind() {
                    TaleweaverErrorKind::Storage(s) if s.kind == StorageErrorKind::EmptyTranscript => {
                        save_status(locale, Ok(None))
                    }
                    _ => {
                        tracing::warn!(error = %e, "Save failed");
                        save_status(locale, Err(&e.description()))
                    }
                },
            }
        };
        self.transcript.set_status(status.clone());
        status
    }

    /// Replaces the character description with a template's text.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is open.
    #[track_caller]
    pub fn select_character(&mut self, template: CharacterTemplate) -> Result<(), StoryError> {
        self.ensure_idle()?;
        let description = template.description(self.locale());
        self.story.set_character_description(description);
        Ok(())
    }

    /// Replaces the character description with free text.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is open.
    #[track_caller]
    pub fn set_character_description(&mut self, description: impl Into<String>) -> Result<(), StoryError> {
        self.ensure_idle()?;
        self.story.set_character_description(description);
        Ok(())
    }

    /// Changes the narrative style for future turns.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is open.
    #[track_caller]
    pub fn set_style(&mut self, style: Style) -> Result<(), StoryError> {
        self.ensure_idle()?;
        self.story.set_style(style);
        Ok(())
    }

    /// Changes the narrative theme for future turns.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is open.
    #[track_caller]
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoryError> {
        self.ensure_idle()?;
        self.story.set_theme(theme);
        Ok(())
    }

    /// Replaces the sampling parameters for future turns.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is open.
    #[track_caller]
    pub fn set_sampling(&mut self, sampling: SamplingParams) -> Result<(), StoryError> {
        self.ensure_idle()?;
        self.sampling = sampling;
        Ok(())
    }

    #[track_caller]
    fn ensure_idle(&self) -> Result<(), StoryError> {
        if self.transcript.has_open_turn() {
            return Err(StoryError::new(StoryErrorKind::TurnInProgress));
        }
        Ok(())
    }
}
