//! Rate table errors.

use thiserror::Error;

/// Errors that can occur while obtaining or checking a rate table
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RateError {
    #[error("Failed to decode rate response: {0}")]
    Decode(String),

    #[error("Rate source unavailable: {0}")]
    Unavailable(String),

    #[error("Expected rates quoted against {expected}, got {found}")]
    BaseMismatch { expected: String, found: String },

    #[error("Invalid currency code '{code}'")]
    InvalidCode { code: String },

    #[error("Invalid rate {rate} for '{code}'")]
    InvalidRate { code: String, rate: f64 },

    #[error("Rate table has {} problem(s)", .0.len())]
    Invalid(Vec<RateError>),
}
