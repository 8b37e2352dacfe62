//! Shared utility modules for StaffScope.

pub mod constants;
pub mod error;
pub mod time;
