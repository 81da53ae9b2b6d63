//! Handlers for the `/categories` resource.
//!
//! Visibility: a user sees global categories plus their own. A category
//! owned by someone else is reported as not found, never as forbidden,
//! so its existence does not leak. Global categories are read-only
//! through the API; only startup provisioning writes them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use scribe_core::access::{self, WriteAccess};
use scribe_core::category::{validate_color, validate_name};
use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::models::category::{Category, CategoryResponse, CreateCategory, UpdateCategory};
use scribe_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult, FieldErrors};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
    })
}

/// GET /api/v1/categories
///
/// List the caller's categories plus global ones, name ascending.
/// Not paginated.
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = CategoryRepo::list_visible(&state.pool, auth.id).await?;
    Ok(Json(
        categories.into_iter().map(Category::into_response).collect(),
    ))
}

/// POST /api/v1/categories
///
/// Create a category owned by the caller. Global categories cannot be
/// created through the API.
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let (name, color) = validate_fields(&input.name, &input.color)?;

    let category = CategoryRepo::create(&state.pool, Some(auth.id), &name, &color).await?;

    tracing::info!(user_id = %auth.id, category_id = category.id, "Category created");

    Ok((StatusCode::CREATED, Json(category.into_response())))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoryResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    if !access::can_view(category.owner_id, auth.id) {
        return Err(not_found());
    }

    Ok(Json(category.into_response()))
}

/// PUT/PATCH /api/v1/categories/{id}
///
/// Update name and/or color. Re-validates and re-trims whatever is
/// supplied.
pub async fn update_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<CategoryResponse>> {
    check_writable(&state, id, &auth).await?;

    let name = input.name.as_deref().map(validate_name).transpose()?;
    if let Some(color) = input.color.as_deref() {
        validate_color(color)?;
    }

    let category = CategoryRepo::update(
        &state.pool,
        id,
        name.as_deref(),
        input.color.as_deref(),
    )
    .await?
    .ok_or_else(not_found)?;

    tracing::info!(user_id = %auth.id, category_id = id, "Category updated");

    Ok(Json(category.into_response()))
}

/// DELETE /api/v1/categories/{id}
///
/// Deleting a category detaches its notes (their category becomes null);
/// the notes themselves survive.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    check_writable(&state, id, &auth).await?;

    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found());
    }

    tracing::info!(user_id = %auth.id, category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Apply the write-access policy for a mutation of category `id`.
async fn check_writable(state: &AppState, id: DbId, auth: &AuthUser) -> AppResult<()> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    match access::check_write(category.owner_id, auth.id) {
        WriteAccess::Allowed => Ok(()),
        WriteAccess::Forbidden => Err(AppError::Core(CoreError::Forbidden(
            "Global categories are read-only".into(),
        ))),
        WriteAccess::Hidden => Err(not_found()),
    }
}

/// Validate both creation fields, collecting failures per field.
fn validate_fields(name: &str, color: &str) -> Result<(String, String), AppError> {
    let mut errors = FieldErrors::new();

    let name = match validate_name(name) {
        Ok(name) => name,
        Err(e) => {
            errors.extend_from(e);
            String::new()
        }
    };
    if let Err(e) = validate_color(color) {
        errors.extend_from(e);
    }

    if errors.is_empty() {
        Ok((name, color.to_string()))
    } else {
        Err(errors.into())
    }
}
