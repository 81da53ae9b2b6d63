//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;

use scribe_core::error::CoreError;
use scribe_core::types::UserId;
use scribe_db::models::user::{UpdateUser, UserResponse};
use scribe_db::repositories::{ProfileRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/users/me
///
/// The authenticated user's own representation.
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    fetch_user(&state, auth.id).await.map(Json)
}

/// GET /api/v1/users/{id}
///
/// Any authenticated user may read any user.
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<UserResponse>> {
    fetch_user(&state, id).await.map(Json)
}

/// PUT /api/v1/users/{id}
///
/// Users may update only themselves; editing anyone else is forbidden
/// (reads stay open, so this is not a visibility question). Email is
/// immutable.
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    if id != auth.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only edit your own account".into(),
        )));
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;

    tracing::info!(user_id = %id, "User updated");

    let profile = ProfileRepo::find_by_user(&state.pool, id).await?;
    Ok(Json(user.into_response(profile)))
}

async fn fetch_user(state: &AppState, id: UserId) -> AppResult<UserResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;
    let profile = ProfileRepo::find_by_user(&state.pool, id).await?;
    Ok(user.into_response(profile))
}
