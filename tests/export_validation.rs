//! Integration tests for export pre-flight validation and file output.

use staffscope::core::fixtures;
use staffscope::export::csv_export::{export_csv, validate_export_path};
use staffscope::export::json_export::export_json;
use std::path::PathBuf;

#[test]
fn validate_export_path_valid_directory() {
    let temp = std::env::temp_dir();
    let path = temp.join("staffscope_test_export.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let path = PathBuf::from("/NonExistent_Dir_12345/output.csv");
    let result = validate_export_path(&path);
    assert!(result.is_err(), "Non-existent dir should fail");
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("does not exist"),
        "Should indicate dir missing: {msg}"
    );
}

#[test]
fn validate_export_path_no_parent() {
    let path = PathBuf::from("just_a_filename.csv");
    // A bare file name resolves to the current directory, which should
    // exist; the pre-flight lets it through.
    let result = validate_export_path(&path);
    if let Err(e) = result {
        let msg = e.to_string();
        assert!(
            msg.contains("parent") || msg.contains("directory"),
            "Error should mention directory: {msg}"
        );
    }
}

#[test]
fn csv_export_writes_header_and_rows() {
    let roster = fixtures::employees();
    let path = std::env::temp_dir().join(format!("staffscope_csv_{}.csv", std::process::id()));

    export_csv(&roster, &path).expect("export should succeed");
    let contents = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);

    let mut lines = contents.lines();
    let header = lines.next().unwrap_or_default();
    assert!(
        header.contains("Badge") && header.contains("Department"),
        "header row missing columns: {header}"
    );
    assert_eq!(lines.count(), roster.len(), "one CSV row per employee");
    assert!(contents.contains("Sarah"), "row content missing");
}

#[test]
fn json_export_is_valid_array() {
    let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let requests = fixtures::leave_requests(today);
    let path = std::env::temp_dir().join(format!("staffscope_json_{}.json", std::process::id()));

    export_json(&requests, &path).expect("export should succeed");
    let contents = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);

    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let array = value.as_array().expect("top-level array");
    assert_eq!(array.len(), requests.len());
    assert!(
        array.iter().all(|v| v.get("employee_name").is_some()),
        "every request serialises its employee name"
    );
}
