//! HTTP-level integration tests for registration and token exchange.
//!
//! Tests cover multi-field validation at registration, the atomic
//! user/profile/token provisioning, and the login (token obtain) flow.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

use scribe_api::auth::password::hash_password;
use scribe_api::auth::token::generate_token_key;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row,
/// its auth token key, and the plaintext password used.
async fn create_test_user(
    pool: &PgPool,
    email: &str,
) -> (scribe_db::models::user::User, String, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password_hash: hashed,
        is_staff: false,
    };
    let token_key = generate_token_key();
    let (user, _profile, token) = UserRepo::create(pool, &input, &token_key)
        .await
        .expect("user creation should succeed");
    (user, token.key, password.to_string())
}

// ---------------------------------------------------------------------------
// Registration tests
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with the user and a usable token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "email": "alice@example.com",
        "password": "a-strong-password",
        "first_name": "Alice",
        "last_name": "Smith",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    assert_eq!(json["message"], "User registered successfully");
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert_eq!(json["user"]["first_name"], "Alice");
    assert_eq!(json["user"]["last_name"], "Smith");
    assert!(json["user"]["id"].is_string(), "user id must be a UUID");

    // The token returned at registration must authenticate requests.
    let token = json["user"]["auth_token"]
        .as_str()
        .expect("registration must return an auth token");
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Registration provisions the profile row alongside the user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_creates_profile(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "email": "withprofile@example.com",
        "password": "a-strong-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM profiles p
         JOIN users u ON u.id = p.user_id
         WHERE u.email = 'withprofile@example.com'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1, "registration must create exactly one profile");
}

/// First and last name are optional and default to empty strings.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_names_optional(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "noname@example.com",
        "password": "a-strong-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["first_name"], "");
    assert_eq!(json["user"]["last_name"], "");
}

/// A duplicate email is rejected with a field-scoped error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    create_test_user(&pool, "taken@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "taken@example.com",
        "password": "a-strong-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["email"][0], "Email already exists");
}

/// A malformed email is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "a-strong-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["email"][0], "Invalid email format");
}

/// A short password is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "shortpw@example.com",
        "password": "short",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["password"][0],
        "Password must be at least 8 characters long"
    );
}

/// All field failures are reported together in one response.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_reports_all_field_errors(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "email": "bogus",
        "password": "short",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["errors"]["email"].is_array());
    assert!(json["errors"]["password"].is_array());

    // Nothing may be persisted on a failed registration.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

/// Missing email and password produce "required" field errors.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/register", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["email"][0], "This field is required");
    assert_eq!(json["errors"]["password"][0], "This field is required");
}

// ---------------------------------------------------------------------------
// Token obtain tests
// ---------------------------------------------------------------------------

/// Valid credentials return the account's stable token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_obtain_token_success(pool: PgPool) {
    let (_user, token_key, password) = create_test_user(&pool, "login@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "login@example.com", "password": password });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // The token is issued once at registration; login returns the same key.
    assert_eq!(json["token"], token_key);
}

/// An incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_obtain_token_wrong_password(pool: PgPool) {
    create_test_user(&pool, "wrongpw@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@example.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown email returns 401, indistinguishable from a bad password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_obtain_token_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@example.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A deactivated account cannot log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_obtain_token_inactive_user(pool: PgPool) {
    let (user, _token, password) = create_test_user(&pool, "inactive@example.com").await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "inactive@example.com", "password": password });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A deactivated account's existing token stops authenticating.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_user_token_rejected(pool: PgPool) {
    let (user, token, _password) = create_test_user(&pool, "revoked@example.com").await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
