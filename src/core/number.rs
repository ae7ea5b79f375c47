//! Display text <-> number conversion.

use super::error::CalcError;
use crate::config::ParseFallback;
use tracing::warn;

/// Parse display text under the given fallback policy.
///
/// `Infinity`, `-Infinity` and `NaN` parse back to the values they render.
pub fn parse_display(text: &str, policy: ParseFallback) -> Result<f64, CalcError> {
    match text.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            ParseFallback::LenientZero => {
                warn!(display = text, "display is not a number, using 0");
                Ok(0.0)
            }
            ParseFallback::Strict => Err(CalcError::InvalidNumber {
                text: text.to_string(),
            }),
        },
    }
}

/// Render a value the way the display shows it.
///
/// Whole numbers keep a trailing `.0`; non-finite values render as
/// `Infinity`, `-Infinity` or `NaN`.
pub fn render(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        let text = format!("{value:?}");
        match text.split_once('e') {
            // `1e-5` becomes `1.0e-5`: every finite rendering carries a point
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{mantissa}.0e{exponent}")
            }
            _ => text,
        }
    }
}

/// Serde adapter storing a number as its display text, so infinities and
/// NaN survive formats without a representation for them.
pub(crate) mod as_text {
    use super::render;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&render(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<f64>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_whole_and_fractional_values() {
        assert_eq!(render(12.0), "12.0");
        assert_eq!(render(-3.5), "-3.5");
        assert_eq!(render(0.1), "0.1");
    }

    #[test]
    fn renders_non_finite_values() {
        assert_eq!(render(f64::INFINITY), "Infinity");
        assert_eq!(render(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(render(f64::NAN), "NaN");
    }

    #[test]
    fn exponent_forms_carry_a_point() {
        assert_eq!(render(1e-5), "1.0e-5");
        assert_eq!(render(1e16), "1.0e16");
        assert_eq!(render(-2e20), "-2.0e20");
        assert_eq!(render(1.5e-7), "1.5e-7");
    }

    #[test]
    fn rendered_values_parse_back() {
        for value in [12.0, -0.25, 1e20, 3.0e-9, f64::INFINITY, f64::NEG_INFINITY] {
            let parsed = parse_display(&render(value), ParseFallback::Strict).unwrap();
            assert_eq!(parsed, value);
        }
        let nan = parse_display(&render(f64::NAN), ParseFallback::Strict).unwrap();
        assert!(nan.is_nan());
    }

    #[test]
    fn lenient_policy_substitutes_zero() {
        assert_eq!(parse_display("12(", ParseFallback::LenientZero).unwrap(), 0.0);
        assert_eq!(parse_display("", ParseFallback::LenientZero).unwrap(), 0.0);
    }

    #[test]
    fn strict_policy_reports_text() {
        let err = parse_display("1.2.3", ParseFallback::Strict).unwrap_err();
        assert!(matches!(err, CalcError::InvalidNumber { ref text } if text == "1.2.3"));
    }
}
