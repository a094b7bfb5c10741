//! Unit conversion and measurement formatting.
//!
//! All stored geometry is in centimeters. [`Unit`] only decides how values are
//! shown to, and read back from, the user.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use serde::{Deserialize, Serialize};

use crate::consts::CM_PER_INCH;

/// Display unit for measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Centimeters (the storage unit).
    #[default]
    Cm,
    /// Inches.
    Inch,
}

/// Convert centimeters to inches.
#[must_use]
pub fn cm_to_inch(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert inches to centimeters.
#[must_use]
pub fn inch_to_cm(inch: f64) -> f64 {
    inch * CM_PER_INCH
}

/// Express a centimeter value in `unit`.
#[must_use]
pub fn from_cm(cm: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Cm => cm,
        Unit::Inch => cm_to_inch(cm),
    }
}

/// Convert a value expressed in `unit` back to centimeters.
#[must_use]
pub fn to_cm(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Cm => value,
        Unit::Inch => inch_to_cm(value),
    }
}

/// Convert between any two units, going through centimeters.
#[must_use]
pub fn convert_unit(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    from_cm(to_cm(value, from), to)
}

/// Format a centimeter value for display in `unit` with a fixed number of decimals.
///
/// Appends `cm` for centimeters and `"` for inches. The decimal separator is
/// always `.`.
#[must_use]
pub fn format_measurement(cm: f64, unit: Unit, decimals: usize) -> String {
    let value = from_cm(cm, unit);
    // Avoid rendering "-0.0" for a signed zero.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}{}", display_suffix(unit))
}

/// Long label for a unit selector (`cm` / `inches`).
#[must_use]
pub fn unit_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Cm => "cm",
        Unit::Inch => "inches",
    }
}

/// Short suffix for input field captions (`cm` / `in`).
#[must_use]
pub fn unit_suffix(unit: Unit) -> &'static str {
    match unit {
        Unit::Cm => "cm",
        Unit::Inch => "in",
    }
}

fn display_suffix(unit: Unit) -> &'static str {
    match unit {
        Unit::Cm => "cm",
        Unit::Inch => "\"",
    }
}

/// Parse a user-entered length in `unit` and return it in centimeters.
///
/// Returns `None` for anything that is not a finite number greater than zero;
/// callers keep their previous value in that case.
#[must_use]
pub fn parse_length(text: &str, unit: Unit) -> Option<f64> {
    parse_offset(text, unit).filter(|cm| *cm > 0.0)
}

/// Parse a user-entered offset in `unit` and return it in centimeters.
///
/// Any finite number is accepted, including zero and negatives; range
/// enforcement is left to the constraining functions.
#[must_use]
pub fn parse_offset(text: &str, unit: Unit) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(to_cm(value, unit)),
        _ => None,
    }
}
