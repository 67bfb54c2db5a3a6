//! Id and time aliases shared by candidate records and the db crate.

/// Store-assigned candidate id (`candidate_summary.candidate_id`, BIGSERIAL).
pub type DbId = i64;

/// Created/modified times on stored candidates, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
