/// Record identifiers are opaque strings. The store assigns UUIDs on
/// creation but never parses them back; an unknown id is a negative
/// lookup result, not a malformed request.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
