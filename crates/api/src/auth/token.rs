//! Opaque auth-token key generation.
//!
//! A token key is the credential clients present in the
//! `Authorization: Token <key>` header. One key exists per user, minted
//! at registration and returned again by the token-obtain endpoint.

use uuid::Uuid;

/// Generate a new random token key (64 lowercase hex characters).
pub fn generate_token_key() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}
