//! Ratio table loader from TOML
//!
//! ```toml
//! vehicle_ratio = 40.0
//!
//! [[categories]]
//! name = "Gnv"
//! unload = 25.0
//! load = 19.0
//!
//! [bonus]
//! threshold = 18
//! low_rate = 5.0
//! high_rate = 10.0
//! ```

use dockpay_domain::{BonusRules, Calculator, CategoryRatios, RatioTable};
use dockpay_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Container for parsing a ratio file
#[derive(Debug, Deserialize)]
struct RatioFile {
    vehicle_ratio: f64,
    categories: Vec<CategoryEntry>,
    #[serde(default)]
    bonus: Option<BonusEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    unload: f64,
    load: f64,
}

#[derive(Debug, Deserialize)]
struct BonusEntry {
    threshold: u32,
    low_rate: f64,
    high_rate: f64,
}

/// Load and validate a ratio file
pub fn load_ratio_file(path: &Path) -> Result<Calculator> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read ratio file: {}",
            e
        )))
    })?;

    let calculator = parse_ratio_toml(&content)?;
    info!(
        path = %path.display(),
        categories = calculator.ratios().len(),
        "loaded ratio table"
    );
    Ok(calculator)
}

/// Parse and validate ratio TOML
pub fn parse_ratio_toml(toml_content: &str) -> Result<Calculator> {
    let file: RatioFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse ratio TOML: {}",
            e
        )))
    })?;

    if file.categories.is_empty() {
        return Err(ConfigError::ParseError("Ratio file defines no categories".to_string()).into());
    }

    let ratios = RatioTable::new(
        file.categories.into_iter().map(|c| {
            (
                c.name,
                CategoryRatios {
                    unload: c.unload,
                    load: c.load,
                },
            )
        }),
        file.vehicle_ratio,
    )?;

    let bonus = match file.bonus {
        Some(b) => BonusRules::new(b.threshold, b.low_rate, b.high_rate)?,
        None => BonusRules::default(),
    };

    Ok(Calculator::new(ratios, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
vehicle_ratio = 40.0

[[categories]]
name = "CompanyA"
unload = 25.0
load = 19.0

[[categories]]
name = "CompanyB"
unload = 22
load = 16
"#;

    #[test]
    fn test_parse_sample() {
        let calc = parse_ratio_toml(SAMPLE).unwrap();
        let ratios = calc.ratios();
        assert_eq!(ratios.len(), 2);
        assert_eq!(ratios.vehicle_ratio(), 40.0);
        let b = ratios.get("CompanyB").unwrap();
        assert_eq!(b.unload, 22.0);
        assert_eq!(b.load, 16.0);
        assert_eq!(calc.bonus_rules(), &BonusRules::default());
    }

    #[test]
    fn test_parse_custom_bonus() {
        let content = format!(
            "{}\n[bonus]\nthreshold = 10\nlow_rate = 4.0\nhigh_rate = 8.0\n",
            SAMPLE
        );
        let calc = parse_ratio_toml(&content).unwrap();
        assert_eq!(calc.bonus_rules().threshold, 10);
        assert_eq!(calc.bonus_rules().total_bonus(12.0), 56.0);
    }

    #[test]
    fn test_zero_ratio_fails_fast() {
        let content = SAMPLE.replace("load = 16", "load = 0");
        let err = parse_ratio_toml(&content).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidRatio { field: "load", .. })
        ));
    }

    #[test]
    fn test_duplicate_category_fails() {
        let content = SAMPLE.replace("CompanyB", "CompanyA");
        let err = parse_ratio_toml(&content).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::DuplicateCategory(_))));
    }

    #[test]
    fn test_empty_categories_fails() {
        let err = parse_ratio_toml("vehicle_ratio = 40.0\ncategories = []\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_malformed_toml_fails() {
        let err = parse_ratio_toml("vehicle_ratio = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse ratio TOML"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ratios.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let calc = load_ratio_file(&path).unwrap();
        assert!(calc.ratios().get("CompanyA").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_ratio_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
