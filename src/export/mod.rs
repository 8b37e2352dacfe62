//! Export modules for StaffScope.
//!
//! Writes the currently filtered records of a view to CSV or pretty JSON.

pub mod csv_export;
pub mod json_export;
