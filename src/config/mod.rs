//! Engine configuration.
//!
//! Configuration is plain serde data loaded from TOML. Every field has a
//! default, so an empty document is a valid configuration:
//!
//! ```rust
//! use quantum_calc::config::{EngineConfig, HistoryStyle, ParseFallback};
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     history_style = "corrected"
//!
//!     [fallback]
//!     parse = "strict"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.history_style, HistoryStyle::Corrected);
//! assert_eq!(config.fallback.parse, ParseFallback::Strict);
//! assert_eq!(config.currency.base, "USD");
//! ```

pub mod error;
pub mod policy;

pub use error::ConfigError;
pub use policy::{FallbackPolicy, HistoryStyle, ParseFallback, RateFallback, UnitFallback};

use crate::currency::{is_currency_code, SUPPORTED_CURRENCIES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

pub const DEFAULT_RATE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest";

/// Currency converter settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Currency every rate is quoted against
    pub base: String,
    /// Currencies offered, in display order
    pub codes: Vec<String>,
    /// Where transports fetch the latest rates from
    pub endpoint: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: "USD".to_string(),
            codes: SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
        }
    }
}

/// Top-level configuration for a calculator session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fallback: FallbackPolicy,
    pub history_style: HistoryStyle,
    pub currency: CurrencyConfig,
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading engine config");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check the configuration, accumulating every problem found.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let currency = &self.currency;
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        if !is_currency_code(&currency.base) {
            checks.push(Validation::fail(ConfigError::InvalidCurrencyCode {
                code: currency.base.clone(),
            }));
        }

        if currency.codes.is_empty() {
            checks.push(Validation::fail(ConfigError::NoCurrencies));
        } else if !currency.codes.contains(&currency.base) {
            checks.push(Validation::fail(ConfigError::BaseNotListed {
                base: currency.base.clone(),
            }));
        }

        let mut seen = HashSet::new();
        for code in &currency.codes {
            let check = if !is_currency_code(code) {
                Validation::fail(ConfigError::InvalidCurrencyCode { code: code.clone() })
            } else if !seen.insert(code.as_str()) {
                Validation::fail(ConfigError::DuplicateCurrency { code: code.clone() })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let endpoint = &currency.endpoint;
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            checks.push(Validation::fail(ConfigError::InvalidEndpoint {
                endpoint: endpoint.clone(),
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand the configuration back, or every problem at once.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(ConfigError::Invalid(errors.iter().cloned().collect())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.currency.codes.len(), 9);
        assert_eq!(config.currency.endpoint, DEFAULT_RATE_ENDPOINT);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_success());
    }

    #[test]
    fn parses_every_section() {
        let config = EngineConfig::from_toml_str(
            r#"
            history_style = "legacy"

            [fallback]
            parse = "strict"
            unit = "strict"
            rate = "pass_through"

            [currency]
            base = "EUR"
            codes = ["EUR", "USD"]
            endpoint = "http://localhost:8080/latest"
            "#,
        )
        .unwrap();

        assert_eq!(config.fallback.parse, ParseFallback::Strict);
        assert_eq!(config.fallback.unit, UnitFallback::Strict);
        assert_eq!(config.fallback.rate, RateFallback::PassThrough);
        assert_eq!(config.currency.base, "EUR");
        assert!(config.clone().validated().is_ok());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("history_style = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = EngineConfig::from_toml_str(r#"history_style = "sideways""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let config = EngineConfig {
            currency: CurrencyConfig {
                base: "usd".to_string(),
                codes: vec!["EUR".to_string(), "EUR".to_string(), "pounds".to_string()],
                endpoint: "ftp://rates".to_string(),
            },
            ..EngineConfig::default()
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 5);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::BaseNotListed { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::DuplicateCurrency { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::InvalidEndpoint { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validated_collects_errors() {
        let config = EngineConfig {
            currency: CurrencyConfig {
                codes: Vec::new(),
                ..CurrencyConfig::default()
            },
            ..EngineConfig::default()
        };

        let err = config.validated().unwrap_err();
        assert_eq!(err, ConfigError::Invalid(vec![ConfigError::NoCurrencies]));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fallback]\nunit = \"strict\"").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.fallback.unit, UnitFallback::Strict);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
