//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- opaque auth-token key generation.

pub mod password;
pub mod token;
