//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when loading or validating an [`EngineConfig`].
///
/// [`EngineConfig`]: super::EngineConfig
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid currency code '{code}'. Codes are three uppercase ASCII letters")]
    InvalidCurrencyCode { code: String },

    #[error("Currency list is empty. Add at least the base currency")]
    NoCurrencies,

    #[error("Base currency '{base}' is not in the currency list")]
    BaseNotListed { base: String },

    #[error("Currency '{code}' is listed more than once")]
    DuplicateCurrency { code: String },

    #[error("Rate endpoint '{endpoint}' is not an http(s) URL")]
    InvalidEndpoint { endpoint: String },

    #[error("Config has {} problem(s)", .0.len())]
    Invalid(Vec<ConfigError>),
}
