//! UI sub-module re-exports for StaffScope.
//!
//! Each sub-module adds rendering methods to [`crate::app::StaffScopeApp`]
//! via `impl` blocks, keeping UI code cleanly separated from state management.

pub mod attendance;
pub mod dashboard;
pub mod documents;
pub mod employees;
pub mod leave;
pub mod nav_panel;
pub mod notifications;
pub mod settings;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
pub mod widgets;
