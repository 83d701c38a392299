//! Error handling utilities
//!
//! This module defines the error types used throughout the console core.

pub mod error;

// Re-export commonly used types
pub use error::{ConsoleError, Result};
