//! Startup provisioning.
//!
//! Runs once after migrations: seeds the default global categories and,
//! when configured, an administrator account. Everything here is
//! best-effort. A provisioning failure is logged and the server starts
//! anyway, since the API itself does not depend on seed data.

use scribe_core::category::DEFAULT_CATEGORIES;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::{CategoryRepo, UserRepo};
use scribe_db::DbPool;

use crate::auth::password;
use crate::auth::token;
use crate::config::ServerConfig;

/// Seed initial data. Never fails; problems are logged as warnings.
pub async fn run(pool: &DbPool, config: &ServerConfig) {
    seed_default_categories(pool).await;
    seed_admin_user(pool, config).await;
}

/// Insert the built-in global categories when none exist yet.
///
/// The count check makes this idempotent across restarts and also means
/// an operator who deliberately deleted a default category via
/// provisioning tooling will not see it resurrected.
async fn seed_default_categories(pool: &DbPool) {
    let existing = match CategoryRepo::count_global(pool).await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(error = %err, "Skipping default category seed, count query failed");
            return;
        }
    };

    if existing > 0 {
        tracing::debug!(existing, "Global categories already present, skipping seed");
        return;
    }

    for (name, color) in DEFAULT_CATEGORIES {
        match CategoryRepo::create(pool, None, name, color).await {
            Ok(category) => {
                tracing::info!(id = category.id, name, "Seeded global category");
            }
            Err(err) => {
                tracing::warn!(name, error = %err, "Failed to seed global category");
            }
        }
    }
}

/// Create the administrator account named by ADMIN_EMAIL/ADMIN_PASSWORD.
///
/// Skipped silently when the variables are unset or the account already
/// exists.
async fn seed_admin_user(pool: &DbPool, config: &ServerConfig) {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return;
    };

    match UserRepo::email_exists(pool, email).await {
        Ok(true) => {
            tracing::debug!(email, "Admin account already exists, skipping seed");
            return;
        }
        Ok(false) => {}
        Err(err) => {
            tracing::warn!(error = %err, "Skipping admin seed, lookup failed");
            return;
        }
    }

    let password_hash = match password::hash_password(password) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::warn!(error = %err, "Skipping admin seed, password hashing failed");
            return;
        }
    };

    let input = CreateUser {
        email: email.clone(),
        first_name: String::new(),
        last_name: String::new(),
        password_hash,
        is_staff: true,
    };

    match UserRepo::create(pool, &input, &token::generate_token_key()).await {
        Ok((user, _, _)) => {
            tracing::info!(user_id = %user.id, email, "Seeded admin account");
        }
        Err(err) => {
            tracing::warn!(email, error = %err, "Failed to seed admin account");
        }
    }
}
