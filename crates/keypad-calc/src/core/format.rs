//! Canonical display format for computed numbers

use crate::core::{CalcError, CalcResult};

/// Fractional digits kept when a computed value is rendered
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Formats a value for the display.
///
/// Fixed-point notation rounded to [`MAX_FRACTION_DIGITS`], with trailing
/// zeros and a dangling decimal point removed: `3.0` renders as `"3"`,
/// `1.0 / 3.0` as `"0.3333333333"`. Negative zero renders as `"0"`. The
/// output never uses exponent notation and always parses back with
/// [`parse_operand`] when `value` is finite.
#[must_use]
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses an operand string into a finite number
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::number_format(text)),
    }
}
