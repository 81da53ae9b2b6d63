//! Handlers for the `/notes` resource.
//!
//! Notes are strictly tenant-scoped: every lookup is keyed by both id
//! and owner, so another user's note is indistinguishable from a
//! missing one. The category filter on listing intentionally checks
//! bare existence rather than visibility (see the category existence
//! note on `list_notes`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use scribe_core::error::CoreError;
use scribe_core::note::{validate_title, DEFAULT_TITLE, PAGE_SIZE};
use scribe_core::types::DbId;
use scribe_db::models::note::{CreateNote, Note, NoteResponse, UpdateNote};
use scribe_db::repositories::{CategoryRepo, NoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::NoteListParams;
use crate::response::Page;
use crate::state::AppState;

fn not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note" })
}

fn invalid_category() -> AppError {
    AppError::Core(CoreError::validation("category_id", "Invalid category ID"))
}

/// GET /api/v1/notes?category_id=&page=
///
/// Paginated listing of the caller's notes, most recently updated
/// first. When `category_id` is given the category must exist -- the
/// check is global, not scoped to the caller's visible set, so
/// filtering by an id the caller cannot otherwise read is accepted
/// while a nonexistent id is a 404.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NoteListParams>,
) -> AppResult<Json<Page<NoteResponse>>> {
    if let Some(category_id) = params.category_id {
        if !CategoryRepo::exists(&state.pool, category_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Category",
            }));
        }
    }

    let page = params.page.unwrap_or(1);
    if page < 1 {
        return Err(AppError::Core(CoreError::NotFound { entity: "Page" }));
    }

    let count = NoteRepo::count(&state.pool, auth.id, params.category_id).await?;

    // Past-the-end pages are not found; an empty first page is fine.
    let total_pages = (count.max(1) + PAGE_SIZE - 1) / PAGE_SIZE;
    if page > total_pages {
        return Err(AppError::Core(CoreError::NotFound { entity: "Page" }));
    }

    let notes = NoteRepo::list(
        &state.pool,
        auth.id,
        params.category_id,
        PAGE_SIZE,
        (page - 1) * PAGE_SIZE,
    )
    .await?;

    let extra_query = params.category_id.map(|id| format!("category_id={id}"));
    Ok(Json(Page::new(
        notes.into_iter().map(Note::into_response).collect(),
        count,
        page,
        PAGE_SIZE,
        "/api/v1/notes",
        extra_query.as_deref(),
    )))
}

/// POST /api/v1/notes
///
/// Create a note owned by the caller. `category_id` is required and
/// must reference an existing category; ownership of the category is
/// not required. Title and content fall back to their defaults.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<NoteResponse>)> {
    let category_id = input.category_id.ok_or_else(invalid_category)?;
    if !CategoryRepo::exists(&state.pool, category_id).await? {
        return Err(invalid_category());
    }

    let title = input.title.as_deref().unwrap_or(DEFAULT_TITLE);
    validate_title(title)?;
    let content = input.content.as_deref().unwrap_or_default();

    let note = NoteRepo::create(&state.pool, auth.id, title, content, category_id).await?;

    tracing::info!(user_id = %auth.id, note_id = note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note.into_response())))
}

/// GET /api/v1/notes/{id}
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NoteResponse>> {
    let note = NoteRepo::find_owned(&state.pool, id, auth.id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(note.into_response()))
}

/// PUT /api/v1/notes/{id}
///
/// Full update: `category_id` is required, matching creation. Omitted
/// title and content keep their stored values.
pub async fn replace_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<NoteResponse>> {
    apply_update(&state, &auth, id, input, true).await
}

/// PATCH /api/v1/notes/{id}
///
/// Partial update: only supplied fields change.
pub async fn patch_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<NoteResponse>> {
    apply_update(&state, &auth, id, input, false).await
}

/// Shared update path for PUT and PATCH.
///
/// Ownership is checked before field validation, so a foreign note is
/// 404 regardless of the body. A supplied `category_id` is validated
/// before anything is written, so an invalid id leaves the note
/// (including its current category) untouched. An explicit null
/// `category_id` is always rejected: a note's category is cleared only
/// by deleting the category.
async fn apply_update(
    state: &AppState,
    auth: &AuthUser,
    id: DbId,
    input: UpdateNote,
    category_required: bool,
) -> AppResult<Json<NoteResponse>> {
    NoteRepo::find_owned(&state.pool, id, auth.id)
        .await?
        .ok_or_else(not_found)?;

    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }

    let category_id = match input.category_id {
        None if category_required => {
            return Err(AppError::Core(CoreError::validation(
                "category_id",
                "This field is required",
            )));
        }
        None => None,
        Some(None) => {
            return Err(AppError::Core(CoreError::validation(
                "category_id",
                "This field may not be null",
            )));
        }
        Some(Some(category_id)) => {
            if !CategoryRepo::exists(&state.pool, category_id).await? {
                return Err(invalid_category());
            }
            Some(category_id)
        }
    };

    let note = NoteRepo::update(
        &state.pool,
        id,
        input.title.as_deref(),
        input.content.as_deref(),
        category_id,
    )
    .await?;

    tracing::info!(user_id = %auth.id, note_id = id, "Note updated");

    Ok(Json(note.into_response()))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    NoteRepo::find_owned(&state.pool, id, auth.id)
        .await?
        .ok_or_else(not_found)?;

    NoteRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = %auth.id, note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
