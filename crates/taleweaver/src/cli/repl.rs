//! Line commands understood by the play session.

use taleweaver_core::{CharacterTemplate, Style, Theme};

/// One line of reader input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Scene text to continue the story with
    Scene(String),
    /// Change the narrative style
    Style(Style),
    /// Change the narrative theme
    Theme(Theme),
    /// Use a character template's description
    Character(CharacterTemplate),
    /// Use a free-text character description
    Describe(String),
    /// Change the sampling temperature
    Temperature(f32),
    /// Change the per-turn token cap
    MaxTokens(u32),
    /// Change the nucleus sampling cutoff
    TopP(f32),
    /// Save the story to a file
    Save,
    /// Clear the story
    Reset,
    /// Print the story so far
    Show,
    /// Print the current settings
    Settings,
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
    /// Blank line
    Empty,
}

pub const HELP: &str = "\
Type scene text to continue the story, or a command:
  /style <name>        narrative style (fantasy, sci-fi, mystery, adventure, romance, horror)
  /theme <name>        narrative theme (adventure, mystery, romance, historical, everyday, fairytale)
  /character <name>    character template (adventurer, detective, artist, scientist, ordinary-person)
  /describe <text>     free-text character description
  /temperature <0.1-2.0>
  /max-tokens <64-1024>
  /top-p <0.1-1.0>
  /settings            show current settings
  /show                print the story so far
  /save                save the story to a file
  /reset               clear the story
  /help                show this list
  /quit                leave
Ctrl-C interrupts a reply in progress.";

impl ReplCommand {
    /// Parses one input line; the error is a message for the reader.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ReplCommand::Empty);
        }
        let Some(command) = line.strip_prefix('/') else {
            return Ok(ReplCommand::Scene(line.to_string()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "style" => Style::from_name(required(name, arg)?)
                .map(ReplCommand::Style)
                .map_err(|e| e.kind.to_string()),
            "theme" => Theme::from_name(required(name, arg)?)
                .map(ReplCommand::Theme)
                .map_err(|e| e.kind.to_string()),
            "character" => CharacterTemplate::from_name(required(name, arg)?)
                .map(ReplCommand::Character)
                .map_err(|e| e.kind.to_string()),
            "describe" => Ok(ReplCommand::Describe(required(name, arg)?.to_string())),
            "temperature" => number(name, arg).map(ReplCommand::Temperature),
            "max-tokens" => number(name, arg).map(ReplCommand::MaxTokens),
            "top-p" => number(name, arg).map(ReplCommand::TopP),
            "save" => Ok(ReplCommand::Save),
            "reset" => Ok(ReplCommand::Reset),
            "show" => Ok(ReplCommand::Show),
            "settings" => Ok(ReplCommand::Settings),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" => Ok(ReplCommand::Quit),
            other => Err(format!("Unknown command: /{} (try /help)", other)),
        }
    }
}

fn required<'a>(name: &str, arg: &'a str) -> Result<&'a str, String> {
    if arg.is_empty() {
        return Err(format!("/{} needs a value", name));
    }
    Ok(arg)
}

fn number<T: std::str::FromStr>(name: &str, arg: &str) -> Result<T, String> {
    required(name, arg)?
        .parse()
        .map_err(|_| format!("/{} needs a number, got '{}'", name, arg))
}
