//! Form field input and numeric coercion

use dockpay_domain::CalculationInput;
use serde::{Deserialize, Serialize};

/// Raw form fields, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub category: String,
    pub pieces_unloaded: String,
    pub pieces_loaded: String,
    pub pieces_vehicles: String,
    pub staff_available: String,
}

impl RawInput {
    /// Every numeric field set to "0", as on session start
    pub fn zeroed(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            pieces_unloaded: "0".to_string(),
            pieces_loaded: "0".to_string(),
            pieces_vehicles: "0".to_string(),
            staff_available: "0".to_string(),
        }
    }

    /// Coerce every numeric field; anything unparseable becomes 0
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            category: self.category.trim().to_string(),
            pieces_unloaded: parse_count(&self.pieces_unloaded),
            pieces_loaded: parse_count(&self.pieces_loaded),
            pieces_vehicles: parse_count(&self.pieces_vehicles),
            staff_available: parse_count(&self.staff_available),
        }
    }
}

impl From<&RawInput> for CalculationInput {
    fn from(raw: &RawInput) -> Self {
        raw.to_input()
    }
}

/// Parse the leading decimal number of a form field.
///
/// Leading whitespace is skipped and trailing text ignored (`"12 pcs"` is
/// 12). Empty, non-numeric or non-finite values give 0.
pub fn parse_count(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = numeric_prefix_len(s);
    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of `[sign] digits [. digits] [e [sign] digits]` at the start of `s`
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut digit_count = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        let frac_count = frac_end - (i + 1);
        if digit_count > 0 || frac_count > 0 {
            digit_count += frac_count;
            i = frac_end;
        }
    }

    if digit_count == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}
