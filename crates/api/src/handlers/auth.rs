//! Handlers for the `/auth` resource (registration and token obtain).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use scribe_core::error::CoreError;
use scribe_core::identity::{validate_email, validate_password};
use scribe_core::types::UserId;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::{AuthTokenRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::generate_token_key;
use crate::error::{AppError, AppResult, FieldErrors};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// User representation embedded in the registration response.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub auth_token: String,
}

/// Response body for `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: RegisteredUser,
    pub message: &'static str,
}

/// Request body for `POST /auth/token`.
#[derive(Debug, Deserialize)]
pub struct ObtainTokenRequest {
    pub email: String,
    pub password: String,
}

/// Response body for `POST /auth/token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a user account. The profile and auth token are provisioned in
/// the same transaction, so a failed registration leaves nothing behind.
/// All field validation failures are reported together.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let mut errors = FieldErrors::new();

    let email = match input.email.as_deref() {
        Some(email) => {
            if let Err(e) = validate_email(email) {
                errors.extend_from(e);
            } else if UserRepo::email_exists(&state.pool, email).await? {
                errors.push("email", "Email already exists");
            }
            email
        }
        None => {
            errors.push("email", "This field is required");
            ""
        }
    };

    let password = match input.password.as_deref() {
        Some(password) => {
            if let Err(e) = validate_password(password) {
                errors.extend_from(e);
            }
            password
        }
        None => {
            errors.push("password", "This field is required");
            ""
        }
    };

    if !errors.is_empty() {
        return Err(errors.into());
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: email.to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
        password_hash,
        is_staff: false,
    };

    let token_key = generate_token_key();
    let (user, _profile, token) = UserRepo::create(&state.pool, &create, &token_key).await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: RegisteredUser {
                id: user.id,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                auth_token: token.key,
            },
            message: "User registered successfully",
        }),
    ))
}

/// POST /api/v1/auth/token
///
/// Exchange email + password for the account's auth token.
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(input): Json<ObtainTokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let token = AuthTokenRepo::find_by_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("No auth token provisioned for user {}", user.id))
        })?;

    Ok(Json(TokenResponse { token: token.key }))
}
