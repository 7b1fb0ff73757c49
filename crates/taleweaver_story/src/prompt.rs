//! Builds the message list sent to the gateway for one turn.

use crate::Turn;
use crate::text::{continuation_prompt, opening_prompt, system_prompt};
use taleweaver_core::{Locale, Message, StoryConfig};

/// Pure function from story state to a model-facing message list.
///
/// The list is always: the fixed system instruction, then every completed
/// turn replayed as a user/assistant pair, then one final user prompt. With
/// no completed turns the final prompt is the opening form; otherwise it is
/// the continuation form, which restates all prior replies.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{Locale, Role, StoryConfig};
/// use taleweaver_story::PromptAssembler;
///
/// let assembler = PromptAssembler::new(Locale::En);
/// let messages = assembler.assemble(&StoryConfig::default(), &[], "A door creaks open.");
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].role, Role::System);
/// assert!(messages[1].content.contains("A door creaks open."));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PromptAssembler {
    locale: Locale,
}

impl PromptAssembler {
    /// Assembler producing prompts in `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Language of the produced prompts.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Builds the messages for a turn whose scene text is `new_user_text`.
    ///
    /// Open turns in `prior_turns` are ignored; the pending input is passed
    /// separately and folded into the final prompt.
    pub fn assemble(
        &self,
        story: &StoryConfig,
        prior_turns: &[Turn],
        new_user_text: &str,
    ) -> Vec<Message> {
        let completed: Vec<&Turn> = prior_turns.iter().filter(|t| !t.is_open()).collect();

        let mut messages = Vec::with_capacity(completed.len() * 2 + 2);
        messages.push(Message::system(system_prompt(self.locale)));

        for turn in &completed {
            if let Some(text) = turn.user_text().as_deref().filter(|t| !t.is_empty()) {
                messages.push(Message::user(text));
            }
            if let Some(text) = turn.assistant_text().as_deref().filter(|t| !t.is_empty()) {
                messages.push(Message::assistant(text));
            }
        }

        messages.push(Message::user(self.final_prompt(story, &completed, new_user_text)));
        messages
    }

    fn final_prompt(&self, story: &StoryConfig, completed: &[&Turn], new_user_text: &str) -> String {
        let style = story.style().label(self.locale);
        let theme = story.theme().label(self.locale);
        let character = story.character_description().as_str();

        if completed.is_empty() {
            return opening_prompt(self.locale, style, theme, character, new_user_text);
        }

        let story_so_far = completed
            .iter()
            .filter_map(|t| t.assistant_text().as_deref())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        continuation_prompt(
            self.locale,
            &story_so_far,
            style,
            theme,
            character,
            new_user_text,
        )
    }
}
