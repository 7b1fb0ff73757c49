//! Error types for the Taleweaver library.
//!
//! This crate provides the error types shared by every Taleweaver crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three families that matter to a running session are:
//! - [`ConfigError`]: fatal at startup (missing credential, bad settings)
//! - [`GatewayError`]: raised by the inference gateway during a turn
//! - [`StorageError`]: raised while archiving a transcript
//!
//! # Examples
//!
//! ```
//! use taleweaver_error::{ConfigError, TaleweaverResult};
//!
//! fn load_token() -> TaleweaverResult<String> {
//!     Err(ConfigError::new("HF_TOKEN is not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got: {}", token),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gateway;
mod storage;
mod story;

pub use config::ConfigError;
pub use error::{TaleweaverError, TaleweaverErrorKind, TaleweaverResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use story::{StoryError, StoryErrorKind};
