use chatview_runtime::format_relative;
use chatview_types::INVALID_DATE;
use chrono::{DateTime, Local, Utc};

const ABSOLUTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Absolute timestamp, local time unless `utc` is set.
pub fn format_absolute(at: Option<DateTime<Utc>>, utc: bool) -> String {
    match at {
        Some(at) if utc => format!("{} UTC", at.format(ABSOLUTE_FORMAT)),
        Some(at) => at.with_timezone(&Local).format(ABSOLUTE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Relative phrase for a snapshot taken at `now`.
pub fn format_age(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match at {
        Some(at) => format_relative(at, now),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_absolute_utc() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_absolute(Some(at), true), "2024-06-01 12:00:00 UTC");
    }

    #[test]
    fn test_unparsed_timestamp_is_invalid_date() {
        assert_eq!(format_absolute(None, false), "Invalid Date");
        assert_eq!(format_age(None, Utc::now()), "Invalid Date");
    }

    #[test]
    fn test_format_age_uses_snapshot_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 5, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_age(Some(at), now), "5 minutes ago");
    }
}
