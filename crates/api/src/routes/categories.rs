//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET              /      -> list visible (global + own)
/// POST             /      -> create (owner = caller)
/// GET              /{id}  -> get (visible only)
/// PUT/PATCH        /{id}  -> update (own only; global are read-only)
/// DELETE           /{id}  -> delete (own only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
}
