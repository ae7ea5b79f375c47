//! Exchange rate tables.

use super::error::RateError;
use super::is_currency_code;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Rates relative to one base currency: one unit of the base buys
/// `rates[code]` units of `code`.
///
/// Decodes directly from a rate service response body; fields other than
/// `base` and `rates` are ignored.
///
/// # Example
///
/// ```rust
/// use quantum_calc::currency::RateTable;
///
/// let table = RateTable::from_json(
///     r#"{"base": "USD", "date": "2024-05-01", "rates": {"USD": 1.0, "EUR": 0.93}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(table.base, "USD");
/// assert_eq!(table.rate("EUR"), Some(0.93));
/// assert_eq!(table.rate("GBP"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }

    /// A table with no rates, in which every conversion passes through.
    pub fn empty(base: impl Into<String>) -> Self {
        Self::new(base, HashMap::new())
    }

    pub fn from_json(body: &str) -> Result<Self, RateError> {
        serde_json::from_str(body).map_err(|e| RateError::Decode(e.to_string()))
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Check every code and rate, accumulating all problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<RateError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RateError>>> = Vec::new();

        if !is_currency_code(&self.base) {
            checks.push(Validation::fail(RateError::InvalidCode {
                code: self.base.clone(),
            }));
        }

        let mut codes: Vec<&String> = self.rates.keys().collect();
        codes.sort();
        for code in codes {
            let rate = self.rates[code];
            let check = if !is_currency_code(code) {
                Validation::fail(RateError::InvalidCode { code: code.clone() })
            } else if !rate.is_finite() || rate <= 0.0 {
                Validation::fail(RateError::InvalidRate {
                    code: code.clone(),
                    rate,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand the table back, or every problem at once.
    pub fn validated(self) -> Result<Self, RateError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(RateError::Invalid(errors.iter().cloned().collect())),
        }
    }
}
