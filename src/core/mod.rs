//! Core module for common functionality across the library and CLI

pub mod calendar;
pub mod config;
pub mod format;
pub mod mixed;
pub mod models;
pub mod pace;
pub mod plan;
pub mod report;
pub mod share;
pub mod validate;

/// Returns the current version of the `oms-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
