//! Dock staffing domain
//!
//! Value types, the fixed ratio and bonus tables, and the pure calculation
//! that turns piece counts and available staff into staffing and bonus
//! figures.

pub mod model;
pub mod service;

pub use model::{
    BonusRules, CalculationInput, CalculationResult, CategoryRatios, RatioTable, StaffBreakdown,
    StaffingStatus,
};
pub use service::{compute, Calculator};
