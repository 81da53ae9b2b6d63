//! Shared query parameter types for API handlers.

use serde::Deserialize;

use scribe_core::types::DbId;

/// Query parameters for the note listing (`?category_id=&page=`).
#[derive(Debug, Deserialize)]
pub struct NoteListParams {
    pub category_id: Option<DbId>,
    /// 1-based page number; defaults to the first page.
    pub page: Option<i64>,
}
