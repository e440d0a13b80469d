/// Users are identified by the opaque UUID carried in the `x-user-id` header.
pub type UserId = uuid::Uuid;

/// Win primary keys are UUIDs.
pub type WinId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
