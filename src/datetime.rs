//! Date Formatting Helpers
//!
//! Display formatting for backend timestamps. Wire timestamps are ISO-8601;
//! they are shown in the timestamp's own wall-clock time.

use chrono::{DateTime, NaiveDateTime};

/// Parse a backend timestamp, tolerating RFC 3339 and `datetime-local` forms
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
    {
        return Some(dt);
    }
    // Date-only values land at midnight
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "Mar 10, 2026" styling; falls back to the raw value when unparseable
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// "Mar 10, 2026 02:30 PM"
pub fn format_date_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d, %Y %I:%M %p").to_string(),
        None => value.to_string(),
    }
}

/// Meeting row format: "02:30 PM   10 Mar (Tue)"
pub fn format_meeting_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%I:%M %p\u{a0}\u{a0}\u{a0}%-d %b (%a)").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time("2026-03-10T14:30:00"),
            "Mar 10, 2026 02:30 PM"
        );
    }

    #[test]
    fn test_rfc3339_accepted() {
        assert_eq!(format_date("2026-03-10T14:30:00+05:30"), "Mar 10, 2026");
    }

    #[test]
    fn test_datetime_local_input_accepted() {
        // `datetime-local` form values omit seconds
        assert_eq!(
            format_meeting_date("2026-03-10T14:30"),
            "02:30 PM\u{a0}\u{a0}\u{a0}10 Mar (Tue)"
        );
    }

    #[test]
    fn test_date_only_accepted() {
        assert_eq!(format_date("2026-03-10"), "Mar 10, 2026");
    }

    #[test]
    fn test_unparseable_passthrough() {
        assert_eq!(format_date("soon"), "soon");
    }
}
