//! Column type aliases shared by models and repositories.

/// Row id. Both tables use `BIGSERIAL` keys.
pub type DbId = i64;

/// `TIMESTAMPTZ` columns, always read back in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
