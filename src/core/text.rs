//! core::text
//!
//! Checks applied to user text before styling.

use thiserror::Error;

/// Default maximum input length, in characters.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 200;

/// Errors from input text checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("Text exceeds maximum length of {max} characters")]
    TooLong { max: usize },
}

/// Check that `text` is at most `max_len` characters long.
///
/// Length is counted in Unicode scalar values.
///
/// # Example
///
/// ```
/// use fontpack::core::text::validate_text_input;
///
/// assert!(validate_text_input("hello", 5).is_ok());
/// assert!(validate_text_input("hello!", 5).is_err());
/// ```
pub fn validate_text_input(text: &str, max_len: usize) -> Result<(), TextError> {
    if text.chars().count() > max_len {
        return Err(TextError::TooLong { max: max_len });
    }
    Ok(())
}

/// Strip leading and trailing whitespace; interior text is untouched.
pub fn sanitize_text(text: &str) -> &str {
    text.trim()
}
