use chrono::{DateTime, NaiveDateTime, Utc};

/// Display artifact used when a timestamp does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const SQLITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an event timestamp.
///
/// Accepts RFC 3339 and SQLite's `CURRENT_TIMESTAMP` layout (taken as UTC).
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(ts, SQLITE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
