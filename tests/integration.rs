//! Integration tests for StaffScope.
//!
//! These tests exercise the crate's public API end to end: seeded
//! collections, filtering, pagination, mutation and export working
//! together the way the views drive them.

mod constants_validation;
mod error_types;
mod export_validation;
mod list_workflow;
