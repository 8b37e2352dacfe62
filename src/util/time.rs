//! Date and time formatting helpers for StaffScope.
//!
//! Provides consistent date/time display across the entire UI.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Today's date in the user's local timezone.
///
/// All "is this record from today?" questions in the app go through this so
/// the notion of "today" is consistent across views.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a calendar date for display in table rows, e.g. `2025-01-15`.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Format a calendar date for detail panes and headers, e.g. `15 Jan 2025`.
pub fn format_date_long(d: NaiveDate) -> String {
    d.format("%d %b %Y").to_string()
}

/// Format a clock-in/out time of day, e.g. `09:02`.
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Format a UTC timestamp as local `YYYY-MM-DD HH:MM:SS`, for exports and
/// detail panes.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a UTC timestamp as relative text against `now`.
///
/// Examples: `just now`, `5 min ago`, `3 hours ago`, `2 days ago`. Anything
/// older than a week falls back to the plain date. Future timestamps (clock
/// skew in seeded data) also fall back to the plain date.
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts);
    if delta.num_seconds() < 0 {
        return format_date(ts.with_timezone(&Local).date_naive());
    }
    if delta.num_minutes() < 1 {
        return "just now".to_string();
    }
    if delta.num_hours() < 1 {
        return format!("{} min ago", delta.num_minutes());
    }
    if delta.num_days() < 1 {
        let h = delta.num_hours();
        return format!("{} hour{} ago", h, if h == 1 { "" } else { "s" });
    }
    if delta.num_days() <= 7 {
        let d = delta.num_days();
        return format!("{} day{} ago", d, if d == 1 { "" } else { "s" });
    }
    format_date(ts.with_timezone(&Local).date_naive())
}

/// Parse a `YYYY-MM-DD` string from user input into a `NaiveDate`.
///
/// Returns `None` for empty or malformed input; dialogs surface that as a
/// field error rather than guessing at other formats.
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_date(d), "2025-01-15");
        assert_eq!(format_date_long(d), "15 Jan 2025");
    }

    #[test]
    fn test_relative_just_now() {
        let now = utc(2025, 6, 1, 12, 0);
        let s = format_relative(utc(2025, 6, 1, 11, 59) + chrono::Duration::seconds(30), now);
        assert_eq!(s, "just now");
    }

    #[test]
    fn test_relative_minutes_and_hours() {
        let now = utc(2025, 6, 1, 12, 0);
        assert_eq!(format_relative(utc(2025, 6, 1, 11, 55), now), "5 min ago");
        assert_eq!(format_relative(utc(2025, 6, 1, 9, 0), now), "3 hours ago");
        assert_eq!(format_relative(utc(2025, 6, 1, 11, 0), now), "1 hour ago");
    }

    #[test]
    fn test_relative_days_then_date() {
        let now = utc(2025, 6, 10, 12, 0);
        assert_eq!(format_relative(utc(2025, 6, 8, 12, 0), now), "2 days ago");
        // Older than a week falls back to the plain date.
        let s = format_relative(utc(2025, 5, 1, 12, 0), now);
        assert!(s.starts_with("2025-0"), "got: {s}");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2025-01-15"),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
        assert!(parse_date_input("").is_none());
        assert!(parse_date_input("15/01/2025").is_none());
        assert!(parse_date_input("2025-13-40").is_none());
    }
}
