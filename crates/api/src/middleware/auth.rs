//! Token-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use scribe_core::error::CoreError;
use scribe_core::types::UserId;
use scribe_db::repositories::AuthTokenRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `Authorization: Token <key>` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Because extractors run before the handler body, a
/// missing or invalid token is rejected before any object lookup:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub id: UserId,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let key = auth_header.strip_prefix("Token ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Token <key>".into(),
            ))
        })?;

        let user = AuthTokenRepo::find_user_by_key(&state.pool, key)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid token".into())))?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
        })
    }
}
