//! Category constants and validation.
//!
//! A category is either owned by a single user or global (no owner).
//! Names are trimmed before persistence and must not be empty once
//! trimmed; colors are hex strings in `#RGB` or `#RRGGBB` form.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum length of a category name after trimming.
pub const MAX_NAME_LENGTH: usize = 100;

/// Hex color pattern: `#RGB` or `#RRGGBB`, case-insensitive digits.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("valid regex"));

/// Default global categories seeded at first startup.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Random Thoughts", "#EF9C66"),
    ("School", "#FCDC94"),
    ("Personal", "#78ABA8"),
];

/// Validate and normalize a category name.
///
/// Returns the trimmed name; fails if the trimmed name is empty or
/// exceeds [`MAX_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(
            "name",
            "Name cannot be empty or whitespace",
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::validation(
            "name",
            format!("Name must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a hex color string.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    if HEX_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(CoreError::validation(
            "color",
            format!("{color} is not a valid HEX color code"),
        ))
    }
}
