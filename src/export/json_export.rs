//! JSON export for filtered record lists.
//!
//! Serialises the record list as a pretty-printed JSON array using Serde.

use crate::util::error::StaffScopeError;
use std::path::Path;

/// Export the given records to a JSON file at `path`.
///
/// Output is a pretty-printed JSON array; every record type in the app
/// derives `Serialize`, so one function covers all views.
///
/// # Errors
/// Returns [`StaffScopeError::Export`] if the file cannot be created or written.
pub fn export_json<T: serde::Serialize>(records: &[T], path: &Path) -> Result<(), StaffScopeError> {
    super::csv_export::validate_export_path(path)?;

    let file = std::fs::File::create(path)
        .map_err(|e| StaffScopeError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| StaffScopeError::Export(format!("Failed to write JSON: {e}")))?;

    // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
    use std::io::Write;
    writer
        .flush()
        .map_err(|e| StaffScopeError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!(
        "Exported {} records to JSON: {}",
        records.len(),
        path.display()
    );
    Ok(())
}
