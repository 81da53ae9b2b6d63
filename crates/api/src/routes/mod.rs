pub mod auth;
pub mod categories;
pub mod health;
pub mod notes;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register (public) -> 201
/// /auth/token                 obtain token (public)
///
/// /users/me                   current user (GET)
/// /users/{id}                 get (any authed), update (self only)
///
/// /categories                 list visible, create (GET, POST)
/// /categories/{id}            get, update, delete
///
/// /notes                      list (?category_id, ?page), create (GET, POST)
/// /notes/{id}                 get, update, delete
/// ```
///
/// `/health` is mounted at the root, outside this tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and token exchange (public).
        .nest("/auth", auth::router())
        // Account lookup and self-service profile updates.
        .nest("/users", users::router())
        // Global and user-owned note categories.
        .nest("/categories", categories::router())
        // Tenant-scoped notes with category filtering and pagination.
        .nest("/notes", notes::router())
}
