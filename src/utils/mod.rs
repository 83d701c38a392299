//! Utility modules shared across the console core

pub mod error;
pub mod logging;
pub mod sanitize;

pub use error::{ConsoleError, Result};
