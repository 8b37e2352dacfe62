//! Core domain modules for StaffScope.
//!
//! Contains the typed HR record model, in-memory filtering, pagination and
//! aggregation, the collection mutation layer, form validation, and the
//! demo seed data.

pub mod attendance;
pub mod document;
pub mod employee;
pub mod filter;
pub mod fixtures;
pub mod leave;
pub mod notification;
pub mod query;
pub mod store;
pub mod validate;
