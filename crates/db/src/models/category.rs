//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{DbId, Timestamp, UserId};

/// A category row plus its derived note count.
///
/// `note_count` is computed per read by a correlated subquery; it is
/// never stored.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: DbId,
    /// `None` marks a global category visible to every user.
    pub owner_id: Option<UserId>,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub note_count: i64,
}

/// External category representation.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: DbId,
    pub user: Option<UserId>,
    pub name: String,
    pub color: String,
    pub note_count: i64,
}

impl Category {
    pub fn into_response(self) -> CategoryResponse {
        CategoryResponse {
            id: self.id,
            user: self.owner_id,
            name: self.name,
            color: self.color,
            note_count: self.note_count,
        }
    }
}

/// DTO for creating a category. The owner comes from the caller identity,
/// never from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color: String,
}

/// DTO for updating a category. Only supplied fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}
