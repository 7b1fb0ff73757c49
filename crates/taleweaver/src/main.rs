//! Taleweaver CLI binary.
//!
//! - `taleweaver play` runs an interactive story session in the terminal
//! - `taleweaver options` lists the available styles, themes and characters

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_options, play};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load .env before anything reads the environment, RUST_LOG included
    dotenvy::dotenv().ok();

    // Story text goes to stdout, so logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => {
            play(args).await?;
        }

        Commands::Options { locale } => {
            list_options(locale.as_deref())?;
        }
    }

    Ok(())
}
