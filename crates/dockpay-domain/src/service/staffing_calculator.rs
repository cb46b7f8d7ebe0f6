//! Staffing requirement, extra pieces and bonus calculation

use std::sync::LazyLock;

use crate::model::{
    BonusRules, CalculationInput, CalculationResult, CategoryRatios, RatioTable, StaffBreakdown,
};

static BUILTIN_CALCULATOR: LazyLock<Calculator> =
    LazyLock::new(|| Calculator::new(RatioTable::builtin().clone(), BonusRules::default()));

/// Compute with the built-in ratio table and bonus rules
pub fn compute(input: &CalculationInput) -> CalculationResult {
    BUILTIN_CALCULATOR.compute(input)
}

/// Calculator over a validated ratio table and bonus rules
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    ratios: RatioTable,
    bonus: BonusRules,
}

impl Default for Calculator {
    fn default() -> Self {
        BUILTIN_CALCULATOR.clone()
    }
}

impl Calculator {
    pub fn new(ratios: RatioTable, bonus: BonusRules) -> Self {
        Self { ratios, bonus }
    }

    pub fn ratios(&self) -> &RatioTable {
        &self.ratios
    }

    pub fn bonus_rules(&self) -> &BonusRules {
        &self.bonus
    }

    /// Staff required per activity, or `None` for an unset/unknown category
    pub fn breakdown(&self, input: &CalculationInput) -> Option<StaffBreakdown> {
        let ratios = self.ratios.get(&input.category)?;
        Some(self.breakdown_with(input, ratios))
    }

    /// Required staff, deficit, extra loaded pieces and bonus per employee.
    ///
    /// An unset or unknown category yields the zero result.
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let Some(ratios) = self.ratios.get(&input.category) else {
            return CalculationResult::default();
        };

        let staff = self.breakdown_with(input, ratios);
        let staff_required = staff.total();
        let staff_deficit = input.staff_available - staff_required;

        let extra_pieces = if input.staff_available > 0.0 {
            // Unload and vehicle crews are staffed first; the clamp applies
            // only after both are subtracted.
            let available_for_load = input.staff_available - staff.unload - staff.vehicles;
            let theoretical_load = available_for_load.max(0.0) * ratios.load;
            input.pieces_loaded - theoretical_load
        } else {
            0.0
        };

        let bonus_per_employee = if input.staff_available > 0.0 {
            self.bonus.total_bonus(extra_pieces) / input.staff_available
        } else {
            0.0
        };

        CalculationResult {
            staff_required,
            staff_deficit,
            extra_pieces,
            bonus_per_employee,
        }
    }

    fn breakdown_with(&self, input: &CalculationInput, ratios: &CategoryRatios) -> StaffBreakdown {
        StaffBreakdown {
            unload: input.pieces_unloaded / ratios.unload,
            load: input.pieces_loaded / ratios.load,
            vehicles: input.pieces_vehicles / self.ratios.vehicle_ratio(),
        }
    }
}
