//! Calculation input and result value types

use serde::{Deserialize, Serialize};

/// Piece counts and staff for one shift.
///
/// An empty `category` means no company was selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub category: String,
    pub pieces_unloaded: f64,
    pub pieces_loaded: f64,
    pub pieces_vehicles: f64,
    pub staff_available: f64,
}

impl CalculationInput {
    /// All counts at zero for `category`
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_unloaded(mut self, pieces: f64) -> Self {
        self.pieces_unloaded = pieces;
        self
    }

    pub fn with_loaded(mut self, pieces: f64) -> Self {
        self.pieces_loaded = pieces;
        self
    }

    pub fn with_vehicles(mut self, pieces: f64) -> Self {
        self.pieces_vehicles = pieces;
        self
    }

    pub fn with_staff(mut self, staff: f64) -> Self {
        self.staff_available = staff;
        self
    }
}

/// Staffing and bonus figures for one shift
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Theoretical staff needed for all three activities
    pub staff_required: f64,
    /// `staff_available - staff_required`; negative means understaffed
    pub staff_deficit: f64,
    /// Pieces loaded beyond what the loading crew should manage; may be negative
    pub extra_pieces: f64,
    pub bonus_per_employee: f64,
}

impl CalculationResult {
    pub fn status(&self) -> StaffingStatus {
        StaffingStatus::from_deficit(self.staff_deficit)
    }
}

/// Staff required per activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffBreakdown {
    pub unload: f64,
    pub load: f64,
    pub vehicles: f64,
}

impl StaffBreakdown {
    pub fn total(&self) -> f64 {
        self.unload + self.load + self.vehicles
    }
}

/// How available staff compares with the theoretical requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingStatus {
    /// Fewer staff than required
    Understaffed,
    /// Exactly the required staff
    ExactlyStaffed,
    /// More staff than required
    Overstaffed,
}

impl StaffingStatus {
    pub fn from_deficit(deficit: f64) -> Self {
        match deficit {
            d if d < 0.0 => StaffingStatus::Understaffed,
            d if d > 0.0 => StaffingStatus::Overstaffed,
            _ => StaffingStatus::ExactlyStaffed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StaffingStatus::Understaffed => "Understaffed (deficit)",
            StaffingStatus::ExactlyStaffed => "Exactly staffed (zero deficit)",
            StaffingStatus::Overstaffed => "Overstaffed (surplus)",
        }
    }

    pub fn is_deficit(&self) -> bool {
        matches!(self, StaffingStatus::Understaffed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_deficit() {
        assert_eq!(StaffingStatus::from_deficit(-0.5), StaffingStatus::Understaffed);
        assert_eq!(StaffingStatus::from_deficit(0.0), StaffingStatus::ExactlyStaffed);
        assert_eq!(StaffingStatus::from_deficit(-0.0), StaffingStatus::ExactlyStaffed);
        assert_eq!(StaffingStatus::from_deficit(3.0), StaffingStatus::Overstaffed);
    }

    #[test]
    fn test_status_labels() {
        assert!(StaffingStatus::Understaffed.is_deficit());
        assert!(!StaffingStatus::Overstaffed.is_deficit());
        assert_eq!(
            StaffingStatus::ExactlyStaffed.label(),
            "Exactly staffed (zero deficit)"
        );
    }

    #[test]
    fn test_input_builder() {
        let input = CalculationInput::new("Gnv")
            .with_unloaded(250.0)
            .with_loaded(190.0)
            .with_vehicles(40.0)
            .with_staff(20.0);
        assert_eq!(input.category, "Gnv");
        assert_eq!(input.pieces_unloaded, 250.0);
        assert_eq!(input.pieces_loaded, 190.0);
        assert_eq!(input.pieces_vehicles, 40.0);
        assert_eq!(input.staff_available, 20.0);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&StaffingStatus::ExactlyStaffed).unwrap();
        assert_eq!(json, "\"exactly_staffed\"");
    }
}
