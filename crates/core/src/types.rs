/// Note primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
