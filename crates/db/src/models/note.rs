//! Note entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{DbId, Timestamp, UserId};

use crate::models::category::CategoryResponse;

/// A note row joined with its (optional) category.
///
/// The flattened `category_*` columns come from a LEFT JOIN; they are
/// all `NULL` together when the note has no category.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub category_id: Option<DbId>,
    pub category_owner_id: Option<UserId>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub category_note_count: Option<i64>,
}

/// External note representation with the category embedded.
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Option<CategoryResponse>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_id: UserId,
}

impl Note {
    pub fn into_response(self) -> NoteResponse {
        let category = self.category_id.map(|id| CategoryResponse {
            id,
            user: self.category_owner_id,
            name: self.category_name.unwrap_or_default(),
            color: self.category_color.unwrap_or_default(),
            note_count: self.category_note_count.unwrap_or_default(),
        });
        NoteResponse {
            id: self.id,
            title: self.title,
            content: self.content,
            category,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user_id: self.user_id,
        }
    }
}

/// DTO for creating a note. `category_id` is required and must reference
/// an existing category; title and content fall back to their defaults.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
}

/// DTO for updating a note. The owner is immutable.
///
/// `category_id` distinguishes an absent field from an explicit JSON
/// null: absent (`None`) leaves the category untouched on a partial
/// update, while null (`Some(None)`) must be rejected by the handler
/// because a note's category can only be cleared by deleting the
/// category itself.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<DbId>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<DbId>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<DbId>::deserialize(deserializer).map(Some)
}
