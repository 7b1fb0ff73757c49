//! In-memory record of the exchanges in a session.

use crate::text::{ASSISTANT_LABEL, user_label};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use taleweaver_core::Locale;
use taleweaver_error::{StoryError, StoryErrorKind};

/// One user-input/assistant-output exchange.
///
/// A turn is open while `assistant_text` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Turn {
    /// Scene text the reader submitted
    user_text: Option<String>,
    /// Reply text, once generation has finished
    assistant_text: Option<String>,
}

impl Turn {
    /// A completed turn.
    pub fn completed(user_text: impl Into<String>, assistant_text: impl Into<String>) -> Self {
        Self {
            user_text: Some(user_text.into()),
            assistant_text: Some(assistant_text.into()),
        }
    }

    /// Whether the reply is still pending.
    pub fn is_open(&self) -> bool {
        self.assistant_text.is_none()
    }
}

/// Ordered, append-only list of turns plus a transient status line.
///
/// At most one turn is open, and only ever the last one.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Locale;
/// use taleweaver_story::Transcript;
///
/// let mut transcript = Transcript::new();
/// transcript.append_open_turn("A storm approaches.").unwrap();
/// assert!(transcript.has_open_turn());
///
/// transcript.complete_open_turn("Thunder rolled over the harbor.").unwrap();
/// assert_eq!(
///     transcript.serialize(Locale::En),
///     "User: A storm approaches.\nAI: Thunder rolled over the harbor.\n\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
    status: Option<String>,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All turns in order, including an open one.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns, including an open one.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Whether the last turn is still waiting for its reply.
    pub fn has_open_turn(&self) -> bool {
        self.turns.last().is_some_and(Turn::is_open)
    }

    /// Turns whose reply has been recorded.
    pub fn completed_turns(&self) -> &[Turn] {
        if self.has_open_turn() {
            &self.turns[..self.turns.len() - 1]
        } else {
            &self.turns
        }
    }

    /// Starts a new exchange.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::TurnInProgress` if a turn is already open.
    #[track_caller]
    pub fn append_open_turn(&mut self, user_text: impl Into<String>) -> Result<(), StoryError> {
        if self.has_open_turn() {
            return Err(StoryError::new(StoryErrorKind::TurnInProgress));
        }
        self.turns.push(Turn {
            user_text: Some(user_text.into()),
            assistant_text: None,
        });
        Ok(())
    }

    /// Records the reply of the open turn.
    ///
    /// # Errors
    ///
    /// Returns `StoryErrorKind::NoOpenTurn` if every turn is already complete.
    #[track_caller]
    pub fn complete_open_turn(&mut self, assistant_text: impl Into<String>) -> Result<(), StoryError> {
        match self.turns.last_mut() {
            Some(turn) if turn.is_open() => {
                turn.assistant_text = Some(assistant_text.into());
                Ok(())
            }
            _ => Err(StoryError::new(StoryErrorKind::NoOpenTurn)),
        }
    }

    /// Clears every turn and the status line.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.status = None;
    }

    /// Transient status line, e.g. the result of the last save.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Clears the status line.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Plain-text rendering used for saved stories.
    ///
    /// Each user entry becomes `<label>: text\n`, each reply `AI: text\n\n`.
    /// Empty entries are skipped.
    pub fn serialize(&self, locale: Locale) -> String {
        let user = user_label(locale);
        let mut out = String::new();
        for turn in &self.turns {
            if let Some(text) = turn.user_text.as_deref().filter(|t| !t.is_empty()) {
                let _ = writeln!(out, "{}: {}", user, text);
            }
            if let Some(text) = turn.assistant_text.as_deref().filter(|t| !t.is_empty()) {
                let _ = writeln!(out, "{}: {}\n", ASSISTANT_LABEL, text);
            }
        }
        out
    }
}
