//! Error types for dockpay

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid {field} ratio for '{category}': {value} (must be a positive number)")]
    InvalidRatio {
        category: String,
        field: &'static str,
        value: f64,
    },

    #[error("Duplicate category in ratio table: {0}")]
    DuplicateCategory(String),

    #[error("Invalid bonus rule {field}: {value}")]
    InvalidBonusRule { field: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ratio_message() {
        let err = ConfigError::InvalidRatio {
            category: "Gnv".to_string(),
            field: "unload",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid unload ratio for 'Gnv': 0 (must be a positive number)"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::DuplicateCategory("Gnv".to_string()).into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Duplicate category"));
    }
}
