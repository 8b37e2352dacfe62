//! CSV export for filtered record lists.
//!
//! Each record type declares its column set via [`CsvRecord`]; the writer
//! itself is shared. Exports always cover the currently *filtered* rows of
//! the active view, not the whole collection.

use crate::core::attendance::AttendanceRecord;
use crate::core::document::Document;
use crate::core::employee::Employee;
use crate::core::leave::LeaveRequest;
use crate::core::notification::Notification;
use crate::util::error::StaffScopeError;
use crate::util::time;
use std::path::Path;

/// A record type that knows its CSV representation.
pub trait CsvRecord {
    /// Header row, written once per file.
    fn headers() -> &'static [&'static str];

    /// One CSV row for this record, aligned with [`headers`](CsvRecord::headers).
    fn row(&self) -> Vec<String>;
}

impl CsvRecord for Employee {
    fn headers() -> &'static [&'static str] {
        &[
            "Badge", "First Name", "Last Name", "Email", "Phone", "Department",
            "Position", "Status", "Start Date",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.badge.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.department.clone(),
            self.position.clone(),
            self.status.label().to_string(),
            time::format_date(self.start_date),
        ]
    }
}

impl CsvRecord for AttendanceRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "Date", "Badge", "Employee", "Department", "Clock In", "Clock Out",
            "Status", "Work Hours", "Notes",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            time::format_date(self.date),
            self.badge.clone(),
            self.employee_name.clone(),
            self.department.clone(),
            AttendanceRecord::clock_label(self.clock_in),
            AttendanceRecord::clock_label(self.clock_out),
            self.status.label().to_string(),
            self.work_hours_label(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for LeaveRequest {
    fn headers() -> &'static [&'static str] {
        &[
            "Badge", "Employee", "Department", "Type", "Start Date", "End Date",
            "Days", "Status", "Reason", "Applied On", "Reviewed By",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.badge.clone(),
            self.employee_name.clone(),
            self.department.clone(),
            self.leave_type.label().to_string(),
            time::format_date(self.start_date),
            time::format_date(self.end_date),
            self.duration_days().to_string(),
            self.status.label().to_string(),
            self.reason.clone(),
            time::format_date(self.applied_on),
            self.reviewed_by.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for Document {
    fn headers() -> &'static [&'static str] {
        &[
            "Name", "Type", "Category", "Version", "Size", "Uploaded By",
            "Uploaded At", "Last Modified", "Audience", "Description",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.kind.label().to_string(),
            self.category.clone(),
            self.current_version.clone(),
            self.size.clone(),
            self.uploaded_by.clone(),
            time::format_date(self.uploaded_at),
            time::format_date(self.last_modified),
            self.audience_label(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for Notification {
    fn headers() -> &'static [&'static str] {
        &["Timestamp", "Type", "Title", "Message", "Read"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            time::format_timestamp(self.timestamp),
            self.kind.label().to_string(),
            self.title.clone(),
            self.message.clone(),
            if self.read { "yes" } else { "no" }.to_string(),
        ]
    }
}

/// Verify that `path` can plausibly be written before spawning the export
/// thread: its parent directory must already exist.
///
/// An empty parent (bare file name) resolves to the current directory and
/// passes.
///
/// # Errors
/// Returns [`StaffScopeError::Export`] when the parent directory is missing.
pub fn validate_export_path(path: &Path) -> Result<(), StaffScopeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(StaffScopeError::Export(format!(
                "Export directory does not exist: {}",
                parent.display()
            )));
        }
    }
    Ok(())
}

/// Export the given records to a CSV file at `path`.
///
/// # Errors
/// Returns [`StaffScopeError::Export`] if the file cannot be created or written.
pub fn export_csv<T: CsvRecord>(records: &[T], path: &Path) -> Result<(), StaffScopeError> {
    validate_export_path(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| StaffScopeError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record(T::headers())
        .map_err(|e| StaffScopeError::Export(format!("Failed to write CSV header: {e}")))?;

    for record in records {
        writer
            .write_record(record.row())
            .map_err(|e| StaffScopeError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| StaffScopeError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!(
        "Exported {} records to CSV: {}",
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_align_with_headers() {
        let roster = crate::core::fixtures::employees();
        for e in &roster {
            assert_eq!(e.row().len(), Employee::headers().len());
        }
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        for r in &crate::core::fixtures::leave_requests(today) {
            assert_eq!(r.row().len(), LeaveRequest::headers().len());
        }
        for d in &crate::core::fixtures::documents(today) {
            assert_eq!(d.row().len(), Document::headers().len());
        }
    }
}
