//! Integration tests for schema-level deletion behaviour.
//!
//! Exercises the repository layer against a real database:
//! - Deleting a user removes its profile, token, notes, and categories
//! - Deleting a category detaches notes instead of deleting them
//! - Unique constraint on email

use sqlx::PgPool;

use scribe_core::types::UserId;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::{AuthTokenRepo, CategoryRepo, NoteRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        is_staff: false,
    }
}

async fn count_for_user(pool: &PgPool, table: &str, column: &str, user_id: UserId) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1");
    let count: (i64,) = sqlx::query_as(&query)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Deleting a user takes its profile, token, notes, and owned categories
/// with it, but leaves global categories untouched.
#[sqlx::test(migrations = "./migrations")]
async fn user_delete_cascades(pool: PgPool) {
    let (user, _profile, _token) = UserRepo::create(&pool, &new_user("doomed@example.com"), "tok1")
        .await
        .unwrap();

    let owned = CategoryRepo::create(&pool, Some(user.id), "Mine", "#111111")
        .await
        .unwrap();
    let global = CategoryRepo::create(&pool, None, "Shared", "#222222")
        .await
        .unwrap();
    NoteRepo::create(&pool, user.id, "A note", "", owned.id)
        .await
        .unwrap();

    let deleted = UserRepo::delete(&pool, user.id).await.unwrap();
    assert!(deleted);

    assert_eq!(count_for_user(&pool, "profiles", "user_id", user.id).await, 0);
    assert_eq!(
        count_for_user(&pool, "auth_tokens", "user_id", user.id).await,
        0
    );
    assert_eq!(count_for_user(&pool, "notes", "user_id", user.id).await, 0);
    assert_eq!(
        count_for_user(&pool, "categories", "owner_id", user.id).await,
        0
    );

    // The global category survives.
    assert!(CategoryRepo::find_by_id(&pool, global.id)
        .await
        .unwrap()
        .is_some());
}

/// Deleting a category nulls the reference on its notes in one statement.
#[sqlx::test(migrations = "./migrations")]
async fn category_delete_detaches_notes(pool: PgPool) {
    let (user, _profile, _token) = UserRepo::create(&pool, &new_user("owner@example.com"), "tok2")
        .await
        .unwrap();

    let category = CategoryRepo::create(&pool, Some(user.id), "Doomed", "#333333")
        .await
        .unwrap();
    let a = NoteRepo::create(&pool, user.id, "First", "", category.id)
        .await
        .unwrap();
    let b = NoteRepo::create(&pool, user.id, "Second", "", category.id)
        .await
        .unwrap();

    let deleted = CategoryRepo::delete(&pool, category.id).await.unwrap();
    assert!(deleted);

    for id in [a.id, b.id] {
        let note = NoteRepo::find_owned(&pool, id, user.id)
            .await
            .unwrap()
            .expect("note must survive its category");
        assert_eq!(note.category_id, None);
        assert_eq!(note.category_name, None);
    }
}

/// Two users cannot share an email address.
#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("unique@example.com"), "tok3")
        .await
        .unwrap();

    let result = UserRepo::create(&pool, &new_user("unique@example.com"), "tok4").await;

    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a unique violation, got {other:?}"),
    }
}

/// A registration token authenticates its user; junk keys do not.
#[sqlx::test(migrations = "./migrations")]
async fn token_lookup(pool: PgPool) {
    let (user, _profile, token) = UserRepo::create(&pool, &new_user("tokened@example.com"), "tok5")
        .await
        .unwrap();

    let found = AuthTokenRepo::find_user_by_key(&pool, &token.key)
        .await
        .unwrap()
        .expect("token must resolve to its user");
    assert_eq!(found.id, user.id);

    let missing = AuthTokenRepo::find_user_by_key(&pool, "nope")
        .await
        .unwrap();
    assert!(missing.is_none());
}
