//! Repository for the `profiles` table.
//!
//! Profiles are created inside the registration transaction (see
//! `UserRepo::create`); this repo only reads them back.

use sqlx::PgPool;

use scribe_core::types::UserId;

use crate::models::profile::Profile;

pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile belonging to a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            "SELECT user_id, avatar, created_at, updated_at FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
