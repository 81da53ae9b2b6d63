//! Note constants and validation.

use crate::error::CoreError;

/// Title applied when a note is created without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Maximum length of a note title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Fixed page size for note listings.
pub const PAGE_SIZE: i64 = 20;

/// Validate a note title.
///
/// Titles are stored as given (no trimming); only the length is
/// bounded. Length counts characters, not bytes, matching the column
/// limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::validation(
            "title",
            format!("Title must be at most {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(())
}
