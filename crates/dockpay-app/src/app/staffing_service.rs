//! Staffing Service - form input to calculation report
//!
//! 1. Coerce raw form fields to numbers
//! 2. Run the calculation over the configured tables
//! 3. Classify the deficit and attach the per-activity breakdown

use dockpay_domain::{
    BonusRules, CalculationInput, CalculationResult, Calculator, StaffBreakdown, StaffingStatus,
};
use dockpay_types::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::input::RawInput;

/// One calculation with everything the presentation layer shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub status: StaffingStatus,
    /// `None` when the category is unset or unknown
    pub breakdown: Option<StaffBreakdown>,
}

/// Ratio table row for listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub name: String,
    pub unload: f64,
    pub load: f64,
    pub vehicles: f64,
}

/// Calculation use case over a validated calculator
#[derive(Debug, Clone, Default)]
pub struct StaffingService {
    calculator: Calculator,
}

impl StaffingService {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Build from config; an invalid ratio file fails here, before any calculation
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.calculator()?))
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn bonus_rules(&self) -> &BonusRules {
        self.calculator.bonus_rules()
    }

    /// Coerce raw fields and calculate
    pub fn calculate(&self, raw: &RawInput) -> Report {
        self.calculate_input(raw.to_input())
    }

    /// Calculate already-numeric input
    pub fn calculate_input(&self, input: CalculationInput) -> Report {
        let breakdown = self.calculator.breakdown(&input);
        if breakdown.is_none() && !input.category.is_empty() {
            warn!(category = %input.category, "unknown category, returning zero result");
        }

        let result = self.calculator.compute(&input);
        debug!(
            category = %input.category,
            staff_required = result.staff_required,
            staff_deficit = result.staff_deficit,
            extra_pieces = result.extra_pieces,
            bonus_per_employee = result.bonus_per_employee,
            "calculated"
        );

        Report {
            status: result.status(),
            input,
            result,
            breakdown,
        }
    }

    /// Session-start calculation: every count at zero
    pub fn initial(&self, category: &str) -> Report {
        self.calculate(&RawInput::zeroed(category))
    }

    /// Ratio table rows in name order
    pub fn categories(&self) -> Vec<CategoryRow> {
        let ratios = self.calculator.ratios();
        ratios
            .iter()
            .map(|(name, r)| CategoryRow {
                name: name.to_string(),
                unload: r.unload,
                load: r.load,
                vehicles: ratios.vehicle_ratio(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(category: &str, unloaded: &str, loaded: &str, vehicles: &str, staff: &str) -> RawInput {
        RawInput {
            category: category.to_string(),
            pieces_unloaded: unloaded.to_string(),
            pieces_loaded: loaded.to_string(),
            pieces_vehicles: vehicles.to_string(),
            staff_available: staff.to_string(),
        }
    }

    #[test]
    fn test_gnv_report() {
        let service = StaffingService::default();
        let report = service.calculate(&raw("Gnv", "250", "190", "40", "20"));
        assert!((report.result.staff_required - 21.0).abs() < 1e-9);
        assert!((report.result.bonus_per_employee - 5.0).abs() < 1e-9);
        assert_eq!(report.status, StaffingStatus::Understaffed);
        let breakdown = report.breakdown.unwrap();
        assert!((breakdown.unload - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_garbage_fields_count_as_zero() {
        let service = StaffingService::default();
        let report = service.calculate(&raw("Grimaldi", "x", "", "?", "12"));
        assert_eq!(report.result.staff_required, 0.0);
        assert_eq!(report.result.staff_deficit, 12.0);
        assert_eq!(report.status, StaffingStatus::Overstaffed);
    }

    #[test]
    fn test_unknown_category_report() {
        let service = StaffingService::default();
        let report = service.calculate(&raw("Moby", "250", "190", "40", "20"));
        assert_eq!(report.result, CalculationResult::default());
        assert!(report.breakdown.is_none());
        assert_eq!(report.status, StaffingStatus::ExactlyStaffed);
    }

    #[test]
    fn test_initial_is_all_zero() {
        let service = StaffingService::default();
        for category in ["", "Gnv", "Grimaldi"] {
            let report = service.initial(category);
            assert_eq!(report.result, CalculationResult::default());
            assert_eq!(report.status, StaffingStatus::ExactlyStaffed);
        }
    }

    #[test]
    fn test_categories_listing() {
        let rows = StaffingService::default().categories();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gnv", "Grimaldi"]);
        assert!(rows.iter().all(|r| r.vehicles == 40.0));
    }

    #[test]
    fn test_report_serializes() {
        let report = StaffingService::default().initial("Gnv");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "exactly_staffed");
        assert_eq!(json["result"]["bonus_per_employee"], 0.0);
        assert_eq!(json["input"]["category"], "Gnv");
    }
}
