//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the taleweaver binary.

mod commands;
mod options;
mod play;
mod repl;

pub use commands::{Cli, Commands, PlayArgs};
pub use options::list_options;
pub use play::play;
