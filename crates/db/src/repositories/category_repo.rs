//! Repository for the `categories` table.

use sqlx::PgPool;

use scribe_core::types::{DbId, UserId};

use crate::models::category::Category;

/// Column list shared across queries. `note_count` is a correlated
/// subquery so the count is recomputed on every read and is valid in
/// `RETURNING` clauses as well.
const COLUMNS: &str = "categories.id, categories.owner_id, categories.name, categories.color, \
                        categories.created_at, categories.updated_at, \
                        (SELECT COUNT(*) FROM notes WHERE notes.category_id = categories.id) AS note_count";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List the categories visible to a user: their own plus global ones,
    /// ordered by name ascending. Other users' categories are excluded
    /// entirely.
    pub async fn list_visible(pool: &PgPool, user_id: UserId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE owner_id IS NULL OR owner_id = $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a category by ID with no visibility scoping.
    ///
    /// Callers are responsible for applying the visibility rule; this is
    /// also what the note listing's existence-only filter check uses.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE categories.id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether any category with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// Create a category. An owner of `None` creates a global category;
    /// only provisioning does that -- the API always passes the caller.
    ///
    /// The name must already be validated and trimmed.
    pub async fn create(
        pool: &PgPool,
        owner_id: Option<UserId>,
        name: &str,
        color: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (owner_id, name, color)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(name)
            .bind(color)
            .fetch_one(pool)
            .await
    }

    /// Update a category's name and/or color, returning the updated row.
    ///
    /// Ownership gating happens in the handler before this is called.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                color = COALESCE($3, color),
                updated_at = NOW()
             WHERE categories.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(name)
            .bind(color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// The `ON DELETE SET NULL` foreign key detaches referencing notes in
    /// the same statement, so no observer can see a note pointing at a
    /// deleted category.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count global (unowned) categories. Used by startup provisioning to
    /// decide whether the default set needs seeding.
    pub async fn count_global(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM categories WHERE owner_id IS NULL")
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }
}
