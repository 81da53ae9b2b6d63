//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create / update DTOs for inserts and patches
//! - A `Serialize` response struct for external-facing output

pub mod auth_token;
pub mod category;
pub mod note;
pub mod profile;
pub mod user;
