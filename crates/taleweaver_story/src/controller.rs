//! One user-to-assistant exchange, streamed.

use crate::text::{apology, interrupted_notice};
use crate::{PromptAssembler, Transcript};
use futures_util::StreamExt;
use taleweaver_core::{GenerateRequest, Locale, SamplingParams, StoryConfig};
use taleweaver_error::{StoryError, TaleweaverError};
use taleweaver_interface::Streaming;
use tokio::sync::mpsc::UnboundedSender;
use tracing::instrument;

/// Progress of a running turn, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnUpdate {
    /// Everything generated so far; each value extends the previous one
    Partial(String),
    /// The turn is closed; nothing follows
    Finished(TurnOutcome),
}

/// How a turn was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The stream ended normally with this text
    Completed(String),
    /// The gateway failed; the apology was recorded instead
    Failed {
        /// Apology stored as the reply
        reply: String,
        /// Error description embedded in the apology
        error: String,
    },
    /// The turn was abandoned before the stream ended
    Interrupted(String),
}

impl TurnOutcome {
    /// Text recorded as the turn's reply.
    pub fn reply(&self) -> &str {
        match self {
            TurnOutcome::Completed(text) | TurnOutcome::Interrupted(text) => text,
            TurnOutcome::Failed { reply, .. } => reply,
        }
    }
}

/// Runs turns against a streaming driver.
///
/// The driver is injected fully configured; the controller never reads the
/// environment.
#[derive(Debug)]
pub struct TurnController<D: Streaming> {
    driver: D,
    assembler: PromptAssembler,
}

impl<D: Streaming> TurnController<D> {
    /// Controller writing prompts and notices in `locale`.
    pub fn new(driver: D, locale: Locale) -> Self {
        Self {
            driver,
            assembler: PromptAssembler::new(locale),
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Language of prompts and notices.
    pub fn locale(&self) -> Locale {
        self.assembler.locale()
    }

    /// Runs one exchange for `new_user_text`.
    ///
    /// Appends an open turn, streams the reply, and always leaves the
    /// transcript with that turn completed: by the generated text, by an
    /// apology if the gateway fails, or by an interruption notice if this
    /// future is dropped first. Cumulative text is pushed to `updates` as it
    /// arrives, followed by exactly one [`TurnUpdate::Finished`]. A closed
    /// receiver does not stop generation.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if the transcript already has
    /// an open turn. Gateway failures are never returned.
    #[instrument(
        skip(self, transcript, story, sampling, new_user_text, updates),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            prior_turns = transcript.len(),
        )
    )]
    pub async fn advance_turn(
        &self,
        transcript: &mut Transcript,
        story: &StoryConfig,
        sampling: &SamplingParams,
        new_user_text: &str,
        updates: &UnboundedSender<TurnUpdate>,
    ) -> Result<TurnOutcome, StoryError> {
        transcript.append_open_turn(new_user_text)?;

        let messages = self
            .assembler
            .assemble(story, transcript.completed_turns(), new_user_text);
        tracing::debug!(messages = messages.len(), "Assembled prompt");
        let request = GenerateRequest::new(messages, *sampling);

        let mut guard = OpenTurnGuard {
            transcript,
            partial: String::new(),
            locale: self.locale(),
            updates: updates.clone(),
        };

        let outcome = match self.stream_reply(&request, &mut guard).await {
            Ok(()) => {
                tracing::info!(chars = guard.partial.chars().count(), "Turn completed");
                TurnOutcome::Completed(std::mem::take(&mut guard.partial))
            }
            Err(e) => {
                let error = e.description();
                tracing::warn!(error = %error, "Generation failed, recording apology");
                TurnOutcome::Failed {
                    reply: apology(self.locale(), &error),
                    error,
                }
            }
        };

        guard.close(outcome.clone());
        Ok(outcome)
    }

    async fn stream_reply(
        &self,
        request: &GenerateRequest,
        guard: &mut OpenTurnGuard<'_>,
    ) -> Result<(), TaleweaverError> {
        let mut stream = self.driver.generate_stream(request).await?;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if chunk.text().is_empty() {
                continue;
            }
            guard.partial.push_str(chunk.text());
            let _ = guard.updates.send(TurnUpdate::Partial(guard.partial.clone()));
        }
        Ok(())
    }
}

/// Completes the open turn if the owning future is dropped mid-stream.
struct OpenTurnGuard<'a> {
    transcript: &'a mut Transcript,
    partial: String,
    locale: Locale,
    updates: UnboundedSender<TurnUpdate>,
}

impl OpenTurnGuard<'_> {
    /// Records the reply and announces the end of the turn.
    fn close(&mut self, outcome: TurnOutcome) {
        if let Err(e) = self.transcript.complete_open_turn(outcome.reply()) {
            tracing::error!(error = %e, "Open turn vanished before completion");
        }
        let _ = self.updates.send(TurnUpdate::Finished(outcome));
    }
}

impl Drop for OpenTurnGuard<'_> {
    fn drop(&mut self) {
        if !self.transcript.has_open_turn() {
            return;
        }
        let notice = interrupted_notice(self.locale);
        let reply = if self.partial.is_empty() {
            notice.to_string()
        } else {
            format!("{}\n{}", self.partial, notice)
        };
        tracing::warn!(chars = self.partial.chars().count(), "Turn interrupted before the reply finished");
        self.close(TurnOutcome::Interrupted(reply));
    }
}
