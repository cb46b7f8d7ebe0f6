//! Use cases

pub mod staffing_service;

pub use staffing_service::{CategoryRow, Report, StaffingService};
