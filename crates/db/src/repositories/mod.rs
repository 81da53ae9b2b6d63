//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod auth_token_repo;
pub mod category_repo;
pub mod note_repo;
pub mod profile_repo;
pub mod user_repo;

pub use auth_token_repo::AuthTokenRepo;
pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use profile_repo::ProfileRepo;
pub use user_repo::UserRepo;
