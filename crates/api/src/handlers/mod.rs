//! HTTP handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod notes;
pub mod users;
