//! Conversion errors.

use super::Domain;
use thiserror::Error;

/// Errors reported by strict conversions and by input parsing.
///
/// Lenient conversions never produce one.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConversionError {
    #[error("Unknown {domain} unit '{unit}'")]
    UnknownUnit { domain: Domain, unit: String },

    #[error("No exchange rate for '{code}'")]
    MissingRate { code: String },

    #[error("Exchange rates have not been loaded")]
    RatesUnavailable,

    #[error("Invalid input '{text}'")]
    InvalidInput { text: String },
}
