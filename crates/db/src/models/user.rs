//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{Timestamp, UserId};

use crate::models::profile::{Profile, ProfileResponse};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    /// Always mirrors `email`; email is the sole login identifier.
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile: Option<ProfileResponse>,
}

impl User {
    /// Build the external representation, optionally embedding the profile.
    pub fn into_response(self, profile: Option<Profile>) -> UserResponse {
        UserResponse {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            profile: profile.map(Profile::into_response),
        }
    }
}

/// DTO for creating a new user. The id is generated by the repository.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_staff: bool,
}

/// DTO for updating an existing user. Email is immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
