//! Domain model types

pub mod bonus_rules;
pub mod calculation;
pub mod ratio_table;

pub use bonus_rules::BonusRules;
pub use calculation::{CalculationInput, CalculationResult, StaffBreakdown, StaffingStatus};
pub use ratio_table::{CategoryRatios, RatioTable};
