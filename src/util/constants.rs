//! Application-wide constants for StaffScope.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "StaffScope";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GitHub repository URL.
pub const APP_GITHUB_URL: &str = "https://github.com/Swatto86/StaffScope";

/// Debounce delay for text-based filter inputs (milliseconds).
/// Prevents excessive re-filtering while the user is still typing.
pub const FILTER_DEBOUNCE_MS: u64 = 150;

/// Rows shown per page in the employee, attendance and document tables.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Rows shown per page in the notification list. Notification rows are a
/// single line each, so the list comfortably fits more of them.
pub const NOTIFICATION_PAGE_SIZE: usize = 8;

/// Bounds for the user-adjustable rows-per-page preference.
pub const MIN_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 50;

/// Maximum accepted length for a first or last name on the employee form.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum accepted length for a leave request reason.
pub const MAX_REASON_LEN: usize = 500;

/// Size of the channel used to report export results back to the UI.
/// Only one export runs at a time, so a single slot is enough.
pub const EXPORT_CHANNEL_BOUND: usize = 1;

/// Application data subdirectory name for logs and configuration.
pub const APP_DATA_DIR: &str = "StaffScope";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "staffscope.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
