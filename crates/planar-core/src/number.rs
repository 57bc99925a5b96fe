//! Number parsing and rounding helpers shared by the array types.

use crate::error::{Error, Result};

/// Parse a decimal number, tolerating surrounding whitespace and a leading
/// `+` or `-` sign.
///
/// Accepts the usual decimal forms (`3`, `-4.5`, `+.25`, `7.`) and
/// exponents (`1e-3`). An empty string, a doubled sign, trailing
/// garbage or a non-finite result (`inf`, `NaN`, `1e999`) is rejected.
///
/// # Examples
///
/// ```
/// use planar_core::number::parse_flexible_double;
///
/// assert_eq!(parse_flexible_double(" +1.5 ").unwrap(), 1.5);
/// assert_eq!(parse_flexible_double("-.5").unwrap(), -0.5);
/// assert!(parse_flexible_double("1.2.3").is_err());
/// ```
pub fn parse_flexible_double(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    // Only one sign; reject "+-1", "--1" and a bare sign.
    if unsigned.is_empty()
        || unsigned.starts_with(['+', '-'])
        || !unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return Err(Error::ParseNumber(text.to_string()));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::ParseNumber(text.to_string()))
}

// Beyond this many places no f64 changes under rounding.
const MAX_PLACES: i32 = 400;

/// Round `value` to `places` decimal digits, halves away from zero.
///
/// Negative `places` rounds to tens, hundreds, and so on. Non-finite
/// values are returned unchanged. Rounding to more places than an `f64`
/// can hold leaves the value as is; rounding to a power of ten beyond the
/// `f64` range gives zero.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = places.clamp(-MAX_PLACES, MAX_PLACES);
    let rounded = if places >= 0 {
        let scale = 10f64.powi(places);
        (value * scale).round() / scale
    } else {
        let step = 10f64.powi(-places);
        if !step.is_finite() {
            return 0.0f64.copysign(value);
        }
        (value / step).round() * step
    };
    if rounded.is_finite() { rounded } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_signed() {
        assert_eq!(parse_flexible_double("3").unwrap(), 3.0);
        assert_eq!(parse_flexible_double("-4.5").unwrap(), -4.5);
        assert_eq!(parse_flexible_double("+2.25").unwrap(), 2.25);
        assert_eq!(parse_flexible_double("7.").unwrap(), 7.0);
        assert_eq!(parse_flexible_double("  1e-3\n").unwrap(), 0.001);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_flexible_double("").is_err());
        assert!(parse_flexible_double("+").is_err());
        assert!(parse_flexible_double("+-1").is_err());
        assert!(parse_flexible_double("--1").is_err());
        assert!(parse_flexible_double("bad").is_err());
        assert!(parse_flexible_double("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for text in ["inf", "NaN", "-NaN", "-infinity", "+Infinity", "1e999"] {
            assert!(parse_flexible_double(text).is_err(), "{text}");
        }
    }

    #[test]
    fn test_parse_error_carries_text() {
        let err = parse_flexible_double("x1").unwrap_err();
        assert_eq!(err, Error::ParseNumber("x1".to_string()));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_places(2.5, 0), 3.0);
        assert_eq!(round_to_places(-2.5, 0), -3.0);
        assert_eq!(round_to_places(1.23456, 2), 1.23);
        assert_eq!(round_to_places(-1.235, 1), -1.2);
        assert_eq!(round_to_places(1234.0, -2), 1200.0);
    }

    #[test]
    fn test_round_extreme_places() {
        assert_eq!(round_to_places(1.5, i32::MIN), 0.0);
        assert_eq!(round_to_places(-1.5, i32::MIN), -0.0);
        assert_eq!(round_to_places(1.5, i32::MAX), 1.5);
        assert_eq!(round_to_places(0.125, 320), 0.125);
    }

    #[test]
    fn test_round_non_finite_unchanged() {
        assert!(round_to_places(f64::NAN, 2).is_nan());
        assert_eq!(round_to_places(f64::INFINITY, 2), f64::INFINITY);
    }
}
