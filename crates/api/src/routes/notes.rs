//! Route definitions for the `/notes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /      -> paginated list (?category_id, ?page)
/// POST   /      -> create
/// GET    /{id}  -> get (own only)
/// PUT    /{id}  -> full update, category required (own only)
/// PATCH  /{id}  -> partial update (own only)
/// DELETE /{id}  -> delete (own only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::replace_note)
                .patch(notes::patch_note)
                .delete(notes::delete_note),
        )
}
