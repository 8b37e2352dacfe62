//! Unified error types for StaffScope.
//!
//! All fallible operations throughout the codebase return `Result<T, StaffScopeError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.

/// Unified error type used throughout StaffScope.
///
/// Each variant captures enough context to produce an actionable message for
/// the user or for log output.
#[derive(Debug, thiserror::Error)]
pub enum StaffScopeError {
    /// Export (CSV or JSON) failed — typically an I/O error.
    #[error("Export failed: {0}")]
    Export(String),

    /// A form was submitted with invalid field values. Carries the number
    /// of offending fields; the per-field messages live on the form dialog.
    #[error("Validation failed: {0} field(s) rejected")]
    #[allow(dead_code)]
    Validation(usize),

    /// A date or time string from user input could not be parsed.
    #[error("Date parse error: {0}")]
    #[allow(dead_code)]
    DateParse(String),

    /// An operation referenced a record id that is not in the collection.
    #[error("Unknown record id: {0}")]
    #[allow(dead_code)]
    UnknownRecord(String),

    /// Catch-all for I/O errors (file writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, StaffScopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_display() {
        let e = StaffScopeError::Export("disk full".into());
        assert_eq!(e.to_string(), "Export failed: disk full");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        let e = fails().unwrap_err();
        assert!(matches!(e, StaffScopeError::Io(_)));
        assert!(e.to_string().contains("gone"));
    }
}
