use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use scribe_core::error::CoreError;

/// Accumulates field-scoped validation messages for a single response.
///
/// Registration validates several fields at once; the client gets every
/// failure in one `{ "errors": { field: [messages] } }` body instead of
/// discovering them one request at a time.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a `CoreError::Validation` under its field; any other
    /// variant is a logic error at the call site.
    pub fn extend_from(&mut self, err: CoreError) {
        match err {
            CoreError::Validation { field, message } => self.push(field, message),
            other => {
                debug_assert!(false, "non-validation error in FieldErrors: {other}");
                self.push("non_field_errors", other.to_string());
            }
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scribe_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// One or more field-scoped validation failures.
    #[error("Validation failed")]
    Fields(FieldErrors),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Fields(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Field-scoped validation: { "errors": { field: [...] } } ---
            AppError::Fields(fields) => {
                let body = json!({ "errors": fields.errors });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            AppError::Core(CoreError::Validation { field, message }) => {
                let mut errors = serde_json::Map::new();
                errors.insert((*field).to_string(), json!([message]));
                let body = json!({ "errors": errors });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            // --- Remaining CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Validation { .. } => unreachable!("handled above"),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                if let Some(response) = classify_sqlx_error(err) {
                    return response;
                }
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error where a more specific response than 500 applies.
///
/// - `RowNotFound` maps to 404.
/// - A unique violation on the users email constraint maps to the same
///   field-scoped 400 as the pre-insert check, so a registration race
///   still surfaces as a ValidationError rather than a Conflict.
fn classify_sqlx_error(err: &sqlx::Error) -> Option<Response> {
    match err {
        sqlx::Error::RowNotFound => {
            let body = json!({ "error": "Resource not found", "code": "NOT_FOUND" });
            Some((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_users_email")
            {
                let body = json!({ "errors": { "email": ["Email already exists"] } });
                return Some((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
            }
            None
        }
        _ => None,
    }
}
