//! Engineering format and display rounding
//!
//! Engineering format is `<number>[<unit-symbol>]`, e.g. `20.1234[°C]`.
//! Dimensionless quantities drop the brackets entirely.

use crate::UnitError;

/// Display configuration for rounded output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSettings {
    /// Significant digits kept when rounding for display
    pub relevant_digits: u32,
}

impl FormatSettings {
    pub const DEFAULT_RELEVANT_DIGITS: u32 = 6;

    pub fn new() -> Self {
        Self {
            relevant_digits: Self::DEFAULT_RELEVANT_DIGITS,
        }
    }

    pub fn with_relevant_digits(mut self, digits: u32) -> Self {
        self.relevant_digits = digits.max(1);
        self
    }
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to `digits` significant digits, ties to even.
///
/// Non-finite values and zero pass through unchanged.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let shift = digits as i32 - 1 - magnitude;

    // Powers of ten up to 1e22 are exact, so scale by multiplying or
    // dividing with an exact power instead of multiplying by 10^-n.
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        round_half_even(scaled) / factor
    } else {
        let factor = 10f64.powi(-shift);
        round_half_even(value / factor) * factor
    }
}

fn round_half_even(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor == 0.5 {
        if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        x.round()
    }
}

/// Canonical number text: shortest representation that parses back to the
/// same `f64`, `.` as decimal separator
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// `<value>[<symbol>]`, or just `<value>` when the symbol is empty
pub fn eng_format(value: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format_number(value)
    } else {
        format!("{}[{}]", format_number(value), symbol)
    }
}

/// Parse the numeric part of a quantity string.
///
/// A `,` decimal separator is accepted.
pub fn parse_number(text: &str) -> Result<f64, UnitError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UnitError::malformed_number(text));
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| UnitError::malformed_number(trimmed))
}

/// Split an engineering-format string into value and symbol.
///
/// Splits on the first `[` and the last `]`. Without brackets the whole text
/// is the number and the symbol is `None`, which is only accepted when
/// `brackets_optional` is set.
pub fn split_eng_format(text: &str, brackets_optional: bool) -> Result<(f64, Option<&str>), UnitError> {
    let trimmed = text.trim();
    let open = trimmed.find('[');
    let close = trimmed.rfind(']');

    match (open, close) {
        (None, None) if brackets_optional => Ok((parse_number(trimmed)?, None)),
        (Some(open), Some(close))
            if open < close
                && !trimmed[..open].contains(']')
                && trimmed[close + 1..].trim().is_empty() =>
        {
            let value = parse_number(&trimmed[..open])?;
            Ok((value, Some(&trimmed[open + 1..close])))
        }
        _ => Err(UnitError::malformed_bracket(trimmed)),
    }
}
