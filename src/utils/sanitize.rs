//! Plain-text input sanitization for free-text form fields
//!
//! Project names, activity descriptions and similar fields are rendered back
//! into the console later, so markup and control characters are stripped
//! before the value ever reaches the backend. Oversize input is rejected
//! outright rather than truncated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::{ConsoleError, Result};

/// Maximum accepted length (in characters) for a free-text field.
pub const MAX_TEXT_LEN: usize = 2000;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Sanitize a free-text value for storage and later display.
///
/// Strips HTML tags and control characters, collapses whitespace runs into a
/// single space and trims the result. Returns `ConsoleError::Validation` when
/// the input exceeds [`MAX_TEXT_LEN`] characters.
pub fn sanitize_text(input: &str) -> Result<String> {
    if input.chars().count() > MAX_TEXT_LEN {
        return Err(ConsoleError::validation(format!(
            "input exceeds {} characters",
            MAX_TEXT_LEN
        )));
    }

    let without_tags = HTML_TAG.replace_all(input, "");
    let without_control: String = without_tags
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    let collapsed = WHITESPACE_RUN.replace_all(&without_control, " ");

    Ok(collapsed.trim().to_string())
}
