//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use staffscope::util::constants::*;

#[test]
fn page_size_bounds_are_ordered() {
    assert!(MIN_PAGE_SIZE > 0, "MIN_PAGE_SIZE must be > 0");
    assert!(
        MIN_PAGE_SIZE <= DEFAULT_PAGE_SIZE,
        "default page size below the minimum"
    );
    assert!(
        DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE,
        "default page size above the maximum"
    );
    assert!(MAX_PAGE_SIZE <= 500, "MAX_PAGE_SIZE unreasonably large");
}

#[test]
fn notification_page_size_is_positive() {
    assert!(NOTIFICATION_PAGE_SIZE > 0);
}

#[test]
fn export_channel_bound_is_positive() {
    assert!(EXPORT_CHANNEL_BOUND > 0, "EXPORT_CHANNEL_BOUND must be > 0");
}

#[test]
fn field_limits_are_bounded() {
    assert!(MAX_NAME_LEN >= 10, "names this short would reject real input");
    assert!(MAX_NAME_LEN <= 500, "MAX_NAME_LEN should be bounded");
    assert!(
        MAX_REASON_LEN >= MAX_NAME_LEN,
        "a reason should allow at least a name's worth of text"
    );
    assert!(MAX_REASON_LEN <= 10_000, "MAX_REASON_LEN should be bounded");
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
    assert!(
        APP_GITHUB_URL.starts_with("https://"),
        "APP_GITHUB_URL must be HTTPS"
    );
}

#[test]
fn debounce_is_reasonable() {
    assert!(FILTER_DEBOUNCE_MS >= 50, "Debounce too low");
    assert!(FILTER_DEBOUNCE_MS <= 2000, "Debounce too high");
}

#[test]
fn log_constants_are_populated() {
    assert!(!APP_DATA_DIR.is_empty());
    assert!(!LOG_DIR.is_empty());
    assert!(LOG_FILE_NAME.ends_with(".log"), "log file should end in .log");
    assert!(
        MAX_LOG_FILE_SIZE >= 1024 * 1024,
        "log rotation threshold below 1 MB would rotate constantly"
    );
}

// ── Regression tests for the rows-per-page preference ───────────────────

/// Restored preferences can carry any value (older builds, edited storage);
/// the app clamps them into the slider range on load. This mirrors that
/// clamp exactly.
#[test]
fn page_size_preference_clamping_is_correct() {
    let clamp = |v: usize| v.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);

    assert_eq!(clamp(0), MIN_PAGE_SIZE, "0 must clamp up to the minimum");
    assert_eq!(clamp(MIN_PAGE_SIZE), MIN_PAGE_SIZE, "minimum is unchanged");
    assert_eq!(clamp(20), 20, "in-range value is unchanged");
    assert_eq!(clamp(MAX_PAGE_SIZE), MAX_PAGE_SIZE, "maximum is unchanged");
    assert_eq!(
        clamp(10_000),
        MAX_PAGE_SIZE,
        "oversized value must clamp down to the maximum"
    );
}
