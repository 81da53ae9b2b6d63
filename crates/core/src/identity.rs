//! Registration input validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// Deliberately permissive: one non-space local part, an `@`, and a dotted
// domain. Real deliverability is the mail system's problem, not ours.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Validate an email address format.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::validation("email", "Invalid email format"))
    }
}

/// Validate password strength (minimum length only).
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
        ));
    }
    Ok(())
}
