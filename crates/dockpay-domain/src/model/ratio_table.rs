//! Piece-per-staff ratios by cargo company

use std::collections::BTreeMap;
use std::sync::LazyLock;

use dockpay_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Pieces one staff member handles per shift for a company
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRatios {
    /// Pieces unloaded per staff member
    pub unload: f64,
    /// Pieces loaded per staff member
    pub load: f64,
}

/// Ratio lookup keyed by category, plus the vehicle ratio shared by all of them.
///
/// Every ratio is finite and strictly positive and every name is non-empty;
/// [`RatioTable::new`] is the only public way to build one, so lookups can
/// divide without checking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioTable {
    categories: BTreeMap<String, CategoryRatios>,
    vehicle_ratio: f64,
}

/// Built-in table used when no ratio file is configured
static BUILTIN_RATIOS: LazyLock<RatioTable> = LazyLock::new(|| {
    let mut categories = BTreeMap::new();
    categories.insert(
        "Gnv".to_string(),
        CategoryRatios {
            unload: 25.0,
            load: 19.0,
        },
    );
    categories.insert(
        "Grimaldi".to_string(),
        CategoryRatios {
            unload: 22.0,
            load: 16.0,
        },
    );

    RatioTable {
        categories,
        vehicle_ratio: 40.0,
    }
});

impl RatioTable {
    /// Build a table, rejecting zero, negative or non-finite ratios, empty
    /// names and repeated category names.
    pub fn new<I, S>(categories: I, vehicle_ratio: f64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, CategoryRatios)>,
        S: Into<String>,
    {
        check_ratio("*", "vehicle", vehicle_ratio)?;

        let mut map = BTreeMap::new();
        for (name, ratios) in categories {
            let name: String = name.into();
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ConfigError::ParseError("empty category name".to_string()));
            }
            check_ratio(&name, "unload", ratios.unload)?;
            check_ratio(&name, "load", ratios.load)?;
            if map.insert(name.clone(), ratios).is_some() {
                return Err(ConfigError::DuplicateCategory(name));
            }
        }

        Ok(Self {
            categories: map,
            vehicle_ratio,
        })
    }

    /// Built-in table (Gnv, Grimaldi, vehicles at 40)
    pub fn builtin() -> &'static RatioTable {
        &BUILTIN_RATIOS
    }

    /// Look up ratios for a category.
    ///
    /// Names match exactly (case-sensitive) after trimming surrounding
    /// whitespace. Empty or unknown names return `None`.
    pub fn get(&self, category: &str) -> Option<&CategoryRatios> {
        self.categories.get(category.trim())
    }

    pub fn vehicle_ratio(&self) -> f64 {
        self.vehicle_ratio
    }

    /// Iterate categories in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryRatios)> {
        self.categories.iter().map(|(name, r)| (name.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn check_ratio(category: &str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio {
            category: category.to_string(),
            field,
            value,
        })
    }
}
