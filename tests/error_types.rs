//! Integration tests for error type construction and display.

use staffscope::util::error::StaffScopeError;

#[test]
fn export_error_preserves_message() {
    let err = StaffScopeError::Export("disk full".into());
    let msg = err.to_string();
    assert!(msg.contains("disk full"), "Should contain detail: {msg}");
}

#[test]
fn validation_error_reports_field_count() {
    let err = StaffScopeError::Validation(3);
    let msg = err.to_string();
    assert!(msg.contains('3'), "Should contain the field count: {msg}");
}

#[test]
fn date_parse_error_preserves_input() {
    let err = StaffScopeError::DateParse("31/12/2025".into());
    let msg = err.to_string();
    assert!(
        msg.contains("31/12/2025"),
        "Should echo the rejected input: {msg}"
    );
}

#[test]
fn unknown_record_error_names_the_id() {
    let err = StaffScopeError::UnknownRecord("emp-404".into());
    let msg = err.to_string();
    assert!(msg.contains("emp-404"), "Should contain the id: {msg}");
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
    let err: StaffScopeError = io_err.into();
    let msg = err.to_string();
    assert!(msg.contains("no access"), "Should preserve IO error: {msg}");
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    // StaffScopeError crosses the export thread boundary
    assert_send_sync::<StaffScopeError>();
}
