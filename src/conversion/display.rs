//! Converter input and output text.

use super::ConversionError;
use crate::core::render;

/// Most characters a converted value shows.
pub const DISPLAY_WIDTH: usize = 10;

/// Render a converted value for display, cut to [`DISPLAY_WIDTH`]
/// characters. The value itself keeps full precision.
pub fn format_conversion(value: f64) -> String {
    render(value).chars().take(DISPLAY_WIDTH).collect()
}

/// Parse converter input. Empty input is "no value yet", not an error.
pub fn parse_input(text: &str) -> Result<Option<f64>, ConversionError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| ConversionError::InvalidInput {
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_values_are_cut() {
        assert_eq!(format_conversion(1.0 / 3.0), "0.33333333");
        assert_eq!(format_conversion(3.28084), "3.28084");
        assert_eq!(format_conversion(212.0), "212.0");
        assert_eq!(format_conversion(1234567.891011), "1234567.89");
    }

    #[test]
    fn empty_input_is_no_value() {
        assert_eq!(parse_input("").unwrap(), None);
        assert_eq!(parse_input("2.5").unwrap(), Some(2.5));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse_input("12abc").unwrap_err(),
            ConversionError::InvalidInput {
                text: "12abc".to_string()
            }
        );
    }
}
