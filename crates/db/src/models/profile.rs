//! Profile model: one-to-one with a user, created alongside it.

use serde::Serialize;
use sqlx::FromRow;

use scribe_core::types::{Timestamp, UserId};

/// A profile row from the `profiles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub user_id: UserId,
    /// Opaque reference to an avatar image, if one was ever set.
    pub avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// External profile representation.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub avatar: Option<String>,
}

impl Profile {
    pub fn into_response(self) -> ProfileResponse {
        ProfileResponse {
            avatar: self.avatar,
        }
    }
}
