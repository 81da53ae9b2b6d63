//! Repository for the `auth_tokens` table.

use sqlx::PgPool;

use scribe_core::types::UserId;

use crate::models::auth_token::AuthToken;
use crate::models::user::User;

pub struct AuthTokenRepo;

impl AuthTokenRepo {
    /// Resolve a token key to its owning user.
    ///
    /// Returns `None` for unknown keys and for keys whose user has been
    /// deactivated; both present as an invalid credential to the caller.
    pub async fn find_user_by_key(pool: &PgPool, key: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.username, u.email, u.first_name, u.last_name, u.password_hash,
                    u.is_active, u.is_staff, u.created_at, u.updated_at
             FROM auth_tokens t
             JOIN users u ON u.id = t.user_id
             WHERE t.key = $1 AND u.is_active",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }

    /// Find the token belonging to a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<AuthToken>, sqlx::Error> {
        sqlx::query_as::<_, AuthToken>(
            "SELECT key, user_id, created_at FROM auth_tokens WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
