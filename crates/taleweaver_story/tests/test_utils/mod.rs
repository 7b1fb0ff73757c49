//! Test utilities for story engine tests.
//!
//! This module provides a scripted streaming driver.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver};
