/// Primary keys for categories and notes are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// User primary keys are application-generated UUIDs (v4).
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
