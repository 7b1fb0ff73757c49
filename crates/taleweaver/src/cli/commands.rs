//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Taleweaver - interactive fiction with a hosted language model
#[derive(Parser, Debug)]
#[command(name = "taleweaver")]
#[command(about = "Interactive fiction generator backed by a hosted language model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive story session
    Play(PlayArgs),

    /// List styles, themes and character templates
    Options {
        /// Language of the labels (zh or en)
        #[arg(long)]
        locale: Option<String>,
    },
}

/// Overrides for a play session; unset flags fall back to settings files.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Settings file to use instead of the default search path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Narrative style (e.g. fantasy, sci-fi)
    #[arg(long)]
    pub style: Option<String>,

    /// Narrative theme (e.g. adventure, everyday)
    #[arg(long)]
    pub theme: Option<String>,

    /// Character template (e.g. detective, ordinary-person)
    #[arg(long)]
    pub character: Option<String>,

    /// Free-text character description, replacing the template text
    #[arg(long)]
    pub describe: Option<String>,

    /// Sampling temperature (0.1 - 2.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum generated tokens per turn (64 - 1024)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Nucleus sampling cutoff (0.1 - 1.0)
    #[arg(long)]
    pub top_p: Option<f32>,

    /// Language of prompts and labels (zh or en)
    #[arg(long)]
    pub locale: Option<String>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Chat-completions base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory for saved stories
    #[arg(long)]
    pub stories_dir: Option<PathBuf>,
}
