//! Opaque auth token model: one token per user, issued at registration.

use sqlx::FromRow;

use scribe_core::types::{Timestamp, UserId};

/// An auth token row from the `auth_tokens` table.
///
/// The key is the opaque credential clients present in the
/// `Authorization: Token <key>` header.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub key: String,
    pub user_id: UserId,
    pub created_at: Timestamp,
}
