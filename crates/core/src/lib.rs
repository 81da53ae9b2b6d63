//! Domain logic for the scribe note-taking backend.
//!
//! Pure types, validation, and access-control policy shared by the `db`
//! and `api` crates. Nothing in here performs I/O.

pub mod access;
pub mod category;
pub mod error;
pub mod identity;
pub mod note;
pub mod types;
