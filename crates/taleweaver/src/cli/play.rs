//! `taleweaver play`: the interactive story loop.

use super::PlayArgs;
use super::repl::{HELP, ReplCommand};
use std::io::Write;
use taleweaver::TaleweaverSettings;
use taleweaver_core::{CharacterTemplate, Locale, SamplingParams, Style, Theme};
use taleweaver_error::TaleweaverResult;
use taleweaver_interface::Streaming;
use taleweaver_models::{ApiToken, HuggingFaceClient};
use taleweaver_storage::TranscriptArchive;
use taleweaver_story::{StorySession, TurnOutcome, TurnUpdate};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;

/// Resolves settings and the credential, then runs the session until the
/// reader quits or stdin closes.
///
/// # Errors
///
/// Returns an error if settings are invalid or `HF_TOKEN` is missing; both
/// are checked before any generation.
pub async fn play(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &args.config {
        Some(path) => TaleweaverSettings::from_file(path)?,
        None => TaleweaverSettings::load()?,
    };
    apply_overrides(&mut settings, &args)?;

    let token = ApiToken::from_env().map_err(|e| {
        tracing::error!(error = %e.message, "Missing gateway credential");
        e
    })?;
    let client = HuggingFaceClient::new(settings.gateway.clone(), token);

    let mut session = StorySession::builder(
        client,
        TranscriptArchive::new(&settings.story.stories_dir),
    )
    .story(settings.story.story_config())
    .sampling(settings.sampling)
    .locale(settings.story.locale)
    .build();

    tracing::info!(
        model = %settings.gateway.model,
        locale = settings.story.locale.as_ref(),
        "Starting story session"
    );
    run_session(&mut session).await
}

/// Applies command-line flags on top of loaded settings.
fn apply_overrides(settings: &mut TaleweaverSettings, args: &PlayArgs) -> TaleweaverResult<()> {
    if let Some(style) = &args.style {
        settings.story.style = Style::from_name(style)?;
    }
    if let Some(theme) = &args.theme {
        settings.story.theme = Theme::from_name(theme)?;
    }
    if let Some(character) = &args.character {
        settings.story.character = CharacterTemplate::from_name(character)?;
        settings.story.character_description = None;
    }
    if let Some(description) = &args.describe {
        settings.story.character_description = Some(description.clone());
    }
    if let Some(locale) = &args.locale {
        settings.story.locale = Locale::from_name(locale)?;
    }
    if let Some(model) = &args.model {
        settings.gateway.model = model.clone();
    }
    if let Some(base_url) = &args.base_url {
        settings.gateway.base_url = base_url.clone();
    }
    if let Some(dir) = &args.stories_dir {
        settings.story.stories_dir = dir.clone();
    }

    let current = settings.sampling;
    settings.sampling = SamplingParams::new(
        args.temperature.unwrap_or(*current.temperature()),
        args.max_tokens.unwrap_or(*current.max_tokens()),
        args.top_p.unwrap_or(*current.top_p()),
    )?;
    Ok(())
}

async fn run_session<D: Streaming>(
    session: &mut StorySession<D>,
) -> Result<(), Box<dyn std::error::Error>> {
    print_settings(session);
    println!("Type /help for commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            println!();
            break;
        };

        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let result = match command {
            ReplCommand::Empty => Ok(()),
            ReplCommand::Scene(text) => {
                run_turn(session, &text).await;
                Ok(())
            }
            ReplCommand::Style(style) => session.set_style(style),
            ReplCommand::Theme(theme) => session.set_theme(theme),
            ReplCommand::Character(template) => session.select_character(template),
            ReplCommand::Describe(text) => session.set_character_description(text),
            ReplCommand::Temperature(value) => {
                update_sampling(session, |s| s.with_temperature(value))
            }
            ReplCommand::MaxTokens(value) => update_sampling(session, |s| s.with_max_tokens(value)),
            ReplCommand::TopP(value) => update_sampling(session, |s| s.with_top_p(value)),
            ReplCommand::Save => {
                println!("{}", session.save());
                Ok(())
            }
            ReplCommand::Reset => session.reset(),
            ReplCommand::Show => {
                print!("{}", session.transcript().serialize(session.locale()));
                if let Some(status) = session.transcript().status() {
                    println!("[{}]", status);
                }
                Ok(())
            }
            ReplCommand::Settings => {
                print_settings(session);
                Ok(())
            }
            ReplCommand::Help => {
                println!("{}", HELP);
                Ok(())
            }
            ReplCommand::Quit => break,
        };

        if let Err(e) = result {
            println!("{}", e.kind);
        }
    }

    Ok(())
}

/// Streams one turn to stdout; Ctrl-C abandons the reply.
async fn run_turn<D: Streaming>(session: &mut StorySession<D>, text: &str) {
    let (tx, mut rx) = unbounded_channel();

    let printer = tokio::spawn(async move {
        let mut printed = 0;
        while let Some(update) = rx.recv().await {
            match update {
                TurnUpdate::Partial(text) => {
                    // Each partial extends the previous one
                    if let Some(suffix) = text.get(printed..) {
                        print!("{}", suffix);
                        let _ = std::io::stdout().flush();
                    }
                    printed = text.len();
                }
                TurnUpdate::Finished(TurnOutcome::Completed(_)) => println!("\n"),
                TurnUpdate::Finished(TurnOutcome::Failed { reply, .. }) => {
                    if printed > 0 {
                        println!();
                    }
                    println!("{}\n", reply);
                }
                TurnUpdate::Finished(TurnOutcome::Interrupted(reply)) => {
                    let notice = reply.get(printed..).unwrap_or_default().trim_start();
                    println!("\n{}\n", notice);
                }
            }
        }
    });

    let result = tokio::select! {
        result = session.submit(text, &tx) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };
    drop(tx);
    if let Err(e) = printer.await {
        tracing::error!(error = %e, "Output task failed");
    }

    match result {
        Some(Ok(_)) => {}
        Some(Err(e)) => println!("{}", e.kind),
        None => tracing::info!("Turn interrupted by reader"),
    }
}

fn update_sampling<D: Streaming>(
    session: &mut StorySession<D>,
    change: impl FnOnce(SamplingParams) -> TaleweaverResult<SamplingParams>,
) -> Result<(), taleweaver_error::StoryError> {
    match change(*session.sampling()) {
        Ok(sampling) => session.set_sampling(sampling),
        Err(e) => {
            println!("{}", e.description());
            Ok(())
        }
    }
}

fn print_settings<D: Streaming>(session: &StorySession<D>) {
    let locale = session.locale();
    let story = session.story();
    let sampling = session.sampling();
    println!(
        "[{} / {}] {}",
        story.style().label(locale),
        story.theme().label(locale),
        story.character_description()
    );
    println!(
        "temperature {}  max tokens {}  top-p {}  model {}",
        sampling.temperature(),
        sampling.max_tokens(),
        sampling.top_p(),
        session.controller().driver().model_name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let mut settings = TaleweaverSettings::default();
        let args = PlayArgs {
            style: Some("horror".into()),
            character: Some("detective".into()),
            temperature: Some(1.3),
            locale: Some("en".into()),
            model: Some("tiny".into()),
            ..Default::default()
        };

        apply_overrides(&mut settings, &args).unwrap();

        assert_eq!(settings.story.style, Style::Horror);
        assert_eq!(settings.story.character, CharacterTemplate::Detective);
        assert_eq!(settings.story.locale, Locale::En);
        assert_eq!(settings.gateway.model, "tiny");
        assert_eq!(*settings.sampling.temperature(), 1.3);
        assert_eq!(*settings.sampling.max_tokens(), 512);
    }

    #[test]
    fn test_description_flag_wins_over_template() {
        let mut settings = TaleweaverSettings::default();
        let args = PlayArgs {
            character: Some("artist".into()),
            describe: Some("a lighthouse keeper".into()),
            ..Default::default()
        };

        apply_overrides(&mut settings, &args).unwrap();

        assert_eq!(
            settings.story.story_config().character_description(),
            "a lighthouse keeper"
        );
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        let mut settings = TaleweaverSettings::default();
        let args = PlayArgs {
            max_tokens: Some(5000),
            ..Default::default()
        };

        assert!(apply_overrides(&mut settings, &args).is_err());
    }

    #[test]
    fn test_unknown_style_flag_is_rejected() {
        let mut settings = TaleweaverSettings::default();
        let args = PlayArgs {
            style: Some("cyberpunk".into()),
            ..Default::default()
        };

        assert!(apply_overrides(&mut settings, &args).is_err());
    }
}
