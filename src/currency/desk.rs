//! The currency desk: live rate table plus its fetch lifecycle.

use super::error::RateError;
use super::rates::RateTable;
use super::source::{fetch_rates, RateSource};
use crate::config::{EngineConfig, RateFallback, UnitFallback};
use crate::conversion::{ConversionError, Domain, UnitScale};
use crate::core::State;
use chrono::{DateTime, Utc};
use stillwater::effect::Effect;
use tracing::{debug, info, warn};

/// Where the rate table is in its fetch lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum RateFetch {
    /// No table has arrived yet, or a refresh is in flight.
    Loading,
    /// A table was installed.
    Ready {
        fetched_at: DateTime<Utc>,
        currencies: usize,
    },
    /// The last fetch failed. Any earlier table is still in use.
    Failed { message: String },
}

impl State for RateFetch {
    fn name(&self) -> &str {
        match self {
            Self::Loading => "Loading",
            Self::Ready { .. } => "Ready",
            Self::Failed { .. } => "Failed",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Currency domain as a [`UnitScale`]: the offered codes and the rates
/// currently installed.
///
/// Missing rates pass through as 1.0. Converting from the base currency
/// skips the division entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyTable {
    codes: Vec<String>,
    rates: RateTable,
}

impl CurrencyTable {
    pub fn new(codes: Vec<String>, rates: RateTable) -> Self {
        Self { codes, rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    fn rate_or_one(&self, code: &str) -> f64 {
        self.rates.rate(code).unwrap_or(1.0)
    }
}

impl UnitScale for CurrencyTable {
    fn domain(&self) -> Domain {
        Domain::Currency
    }

    fn units(&self) -> Vec<&str> {
        self.codes.iter().map(String::as_str).collect()
    }

    fn knows(&self, unit: &str) -> bool {
        unit == self.rates.base || self.codes.iter().any(|c| c == unit)
    }

    fn to_base(&self, value: f64, unit: &str) -> f64 {
        if unit == self.rates.base {
            value
        } else {
            value / self.rate_or_one(unit)
        }
    }

    fn from_base(&self, value: f64, unit: &str) -> f64 {
        value * self.rate_or_one(unit)
    }
}

/// Owns the currency table and replaces it in one assignment whenever a
/// fetch succeeds.
///
/// # Example
///
/// ```rust
/// use quantum_calc::config::EngineConfig;
/// use quantum_calc::core::State;
/// use quantum_calc::currency::{CurrencyDesk, RateTable};
/// use std::collections::HashMap;
///
/// let mut desk = CurrencyDesk::new(&EngineConfig::default());
/// assert_eq!(desk.status().name(), "Loading");
///
/// desk.replace_rates(RateTable::new("USD", HashMap::from([("EUR".to_string(), 0.5)])));
/// assert_eq!(desk.status().name(), "Ready");
/// assert_eq!(desk.convert(10.0, "USD", "EUR"), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct CurrencyDesk {
    base: String,
    table: CurrencyTable,
    status: RateFetch,
    unit_policy: UnitFallback,
    rate_policy: RateFallback,
}

impl CurrencyDesk {
    pub fn new(config: &EngineConfig) -> Self {
        let base = config.currency.base.clone();
        Self {
            table: CurrencyTable::new(config.currency.codes.clone(), RateTable::empty(&base)),
            base,
            status: RateFetch::Loading,
            unit_policy: config.fallback.unit,
            rate_policy: config.fallback.rate,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn status(&self) -> &RateFetch {
        &self.status
    }

    pub fn table(&self) -> &CurrencyTable {
        &self.table
    }

    /// Install a new rate table.
    pub fn replace_rates(&mut self, rates: RateTable) {
        let currencies = rates.len();
        self.table.rates = rates;
        self.status = RateFetch::Ready {
            fetched_at: Utc::now(),
            currencies,
        };
        info!(currencies, "installed exchange rates");
    }

    /// Mark the last fetch as failed. The current table stays in place.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "exchange rates unavailable");
        self.status = RateFetch::Failed { message };
    }

    /// Fetch the latest rates once from the environment's rate source.
    ///
    /// On success the table is replaced; on failure the error is recorded
    /// in [`status`](Self::status) and returned. There are no retries.
    pub async fn refresh<Env>(&mut self, env: &Env) -> Result<(), RateError>
    where
        Env: RateSource + Clone + Send + Sync + 'static,
    {
        self.status = RateFetch::Loading;
        debug!(base = %self.base, "refreshing exchange rates");

        match fetch_rates::<Env>(&self.base).run(env).await {
            Ok(table) => {
                self.replace_rates(table);
                Ok(())
            }
            Err(e) => {
                self.record_failure(e.to_string());
                Err(e)
            }
        }
    }

    /// Convert with every fallback lenient. Never fails.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> f64 {
        self.table.convert(value, from, to)
    }

    /// Convert under the configured unit and rate policies.
    pub fn try_convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        if self.rate_policy == RateFallback::Strict {
            if self.table.rates.is_empty() {
                return Err(ConversionError::RatesUnavailable);
            }
            for code in [from, to] {
                if code != self.table.rates.base && self.table.rates.rate(code).is_none() {
                    return Err(ConversionError::MissingRate {
                        code: code.to_string(),
                    });
                }
            }
        }

        self.table.try_convert(value, from, to, self.unit_policy)
    }
}
