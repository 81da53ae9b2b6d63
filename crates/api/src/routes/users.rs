//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET       /me    -> current user
/// GET       /{id}  -> any authenticated user
/// PUT/PATCH /{id}  -> self only
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(users::me)).route(
        "/{id}",
        get(users::get_user)
            .put(users::update_user)
            .patch(users::update_user),
    )
}
