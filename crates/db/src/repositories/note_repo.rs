//! Repository for the `notes` table.
//!
//! Every query joins the (optional) category so responses can embed it
//! without a second round trip.

use sqlx::PgPool;

use scribe_core::types::{DbId, UserId};

use crate::models::note::Note;

/// Joined column list shared across queries.
const COLUMNS: &str = "n.id, n.user_id, n.title, n.content, n.created_at, n.updated_at, \
                        n.category_id, c.owner_id AS category_owner_id, \
                        c.name AS category_name, c.color AS category_color, \
                        (SELECT COUNT(*) FROM notes n2 WHERE n2.category_id = c.id) AS category_note_count";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List a user's notes, most recently updated first, optionally
    /// filtered to one category.
    pub async fn list(
        pool: &PgPool,
        user_id: UserId,
        category_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.user_id = $1 AND ($2::BIGINT IS NULL OR n.category_id = $2)
             ORDER BY n.updated_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count the notes the matching `list` call would return.
    pub async fn count(
        pool: &PgPool,
        user_id: UserId,
        category_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notes
             WHERE user_id = $1 AND ($2::BIGINT IS NULL OR category_id = $2)",
        )
        .bind(user_id)
        .bind(category_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    /// Find a note by ID, scoped to its owner.
    ///
    /// Another user's note is indistinguishable from a nonexistent one.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: UserId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.id = $1 AND n.user_id = $2"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a note and return it with its category joined.
    ///
    /// The category must already be known to exist.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        title: &str,
        content: &str,
        category_id: DbId,
    ) -> Result<Note, sqlx::Error> {
        let inserted: (DbId,) = sqlx::query_as(
            "INSERT INTO notes (user_id, title, content, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        Self::fetch(pool, inserted.0).await
    }

    /// Apply a partial update and return the refreshed row.
    ///
    /// `updated_at` is always bumped, which moves the note to the front
    /// of its owner's listing. A `category_id` of `None` leaves the
    /// current category untouched; ownership gating and category
    /// existence checks happen in the handler.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        content: Option<&str>,
        category_id: Option<DbId>,
    ) -> Result<Note, sqlx::Error> {
        sqlx::query(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                category_id = COALESCE($4, category_id),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(category_id)
        .execute(pool)
        .await?;

        Self::fetch(pool, id).await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch a single note with its category joined, by primary key.
    async fn fetch(pool: &PgPool, id: DbId) -> Result<Note, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.id = $1"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
