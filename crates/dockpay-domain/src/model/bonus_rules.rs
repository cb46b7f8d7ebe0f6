//! Tiered piece-rate bonus

use dockpay_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Piece-rate bonus with a higher rate past a threshold.
///
/// Pieces `1..=threshold` earn `low_rate`, every piece after that earns
/// `high_rate`. The rate is progressive: crossing the threshold does not
/// reprice the first `threshold` pieces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusRules {
    pub threshold: u32,
    pub low_rate: f64,
    pub high_rate: f64,
}

impl Default for BonusRules {
    fn default() -> Self {
        Self {
            threshold: 18,
            low_rate: 5.0,
            high_rate: 10.0,
        }
    }
}

impl BonusRules {
    pub fn new(threshold: u32, low_rate: f64, high_rate: f64) -> Result<Self, ConfigError> {
        for (field, value) in [("low_rate", low_rate), ("high_rate", high_rate)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBonusRule { field, value });
            }
        }
        Ok(Self {
            threshold,
            low_rate,
            high_rate,
        })
    }

    /// Bonus pool earned by `extra_pieces`.
    ///
    /// Only whole pieces count; zero, negative and NaN extras earn nothing.
    pub fn total_bonus(&self, extra_pieces: f64) -> f64 {
        if extra_pieces.is_nan() || extra_pieces <= 0.0 {
            return 0.0;
        }

        let pieces = extra_pieces.floor();
        let threshold = f64::from(self.threshold);
        if pieces <= threshold {
            pieces * self.low_rate
        } else {
            threshold * self.low_rate + (pieces - threshold) * self.high_rate
        }
    }
}
