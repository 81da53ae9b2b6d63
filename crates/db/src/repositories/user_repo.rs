//! Repository for the `users` table.

use sqlx::PgPool;
use uuid::Uuid;

use scribe_core::types::UserId;

use crate::models::auth_token::AuthToken;
use crate::models::profile::Profile;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, \
                        is_active, is_staff, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user together with its profile and auth token.
    ///
    /// This is the explicit post-creation hook: the three rows are
    /// written in one transaction so a registration either fully
    /// provisions the account or leaves nothing behind.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUser,
        token_key: &str,
    ) -> Result<(User, Profile, AuthToken), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: UserId = Uuid::new_v4();
        let query = format!(
            "INSERT INTO users (id, username, email, first_name, last_name, password_hash, is_staff)
             VALUES ($1, $2, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .bind(input.is_staff)
            .fetch_one(&mut *tx)
            .await?;

        let profile = sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (user_id)
             VALUES ($1)
             RETURNING user_id, avatar, created_at, updated_at",
        )
        .bind(user.id)
        .fetch_one(&mut *tx)
        .await?;

        let token = sqlx::query_as::<_, AuthToken>(
            "INSERT INTO auth_tokens (key, user_id)
             VALUES ($1, $2)
             RETURNING key, user_id, created_at",
        )
        .bind(token_key)
        .bind(user.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((user, profile, token))
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: UserId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a user with the given email already exists.
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// Update a user's names. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: UserId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by ID. Returns `true` if a row was deleted.
    ///
    /// Not exposed through the API; exists for provisioning and tests.
    /// Profile, auth token, notes, and owned categories cascade-delete;
    /// notes referencing a cascaded category are detached by the FK.
    pub async fn delete(pool: &PgPool, id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
