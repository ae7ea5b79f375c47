//! Where rate tables come from.
//!
//! The core never talks to the network. A `RateSource` is an environment
//! capability: production code implements it over whatever transport it
//! uses, tests use `StaticRateSource`. `fetch_rates` wraps one call to it
//! in an effect, run once against the environment that provides it.

use super::error::RateError;
use super::rates::RateTable;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use tracing::{debug, warn};

/// Capability to produce the latest rate table for a base currency.
pub trait RateSource {
    fn latest(&self, base: &str) -> Result<RateTable, RateError>;
}

/// In-memory rate source answering every request with the same outcome.
#[derive(Clone, Debug)]
pub struct StaticRateSource {
    outcome: Result<RateTable, RateError>,
}

impl StaticRateSource {
    pub fn new(table: RateTable) -> Self {
        Self { outcome: Ok(table) }
    }

    /// A source whose every request fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(RateError::Unavailable(message.into())),
        }
    }
}

impl RateSource for StaticRateSource {
    fn latest(&self, _base: &str) -> Result<RateTable, RateError> {
        self.outcome.clone()
    }
}

/// One fetch of the latest rates for `base`.
///
/// A single attempt: no retries, no timeout, no backoff. The table must be
/// quoted against the requested base and pass validation.
pub fn fetch_rates<Env>(base: &str) -> BoxedEffect<RateTable, RateError, Env>
where
    Env: RateSource + Clone + Send + Sync + 'static,
{
    let base = base.to_string();
    from_fn(move |env: &Env| -> Result<RateTable, RateError> {
        let table = env.latest(&base).inspect_err(|e| {
            warn!(base = %base, error = %e, "rate fetch failed");
        })?;

        if table.base != base {
            return Err(RateError::BaseMismatch {
                expected: base.clone(),
                found: table.base,
            });
        }

        let table = table.validated()?;
        debug!(base = %base, currencies = table.len(), "fetched rate table");
        Ok(table)
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use stillwater::effect::Effect;

    fn usd_table() -> RateTable {
        RateTable::new(
            "USD",
            HashMap::from([("USD".to_string(), 1.0), ("EUR".to_string(), 0.9)]),
        )
    }

    #[tokio::test]
    async fn fetch_returns_source_table() {
        let env = StaticRateSource::new(usd_table());
        let table = fetch_rates::<StaticRateSource>("USD").run(&env).await.unwrap();
        assert_eq!(table, usd_table());
    }

    #[tokio::test]
    async fn fetch_surfaces_source_failure() {
        let env = StaticRateSource::failing("connection refused");
        let err = fetch_rates::<StaticRateSource>("USD")
            .run(&env)
            .await
            .unwrap_err();
        assert_eq!(err, RateError::Unavailable("connection refused".to_string()));
    }

    #[tokio::test]
    async fn fetch_rejects_wrong_base() {
        let env = StaticRateSource::new(RateTable::empty("EUR"));
        let err = fetch_rates::<StaticRateSource>("USD")
            .run(&env)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RateError::BaseMismatch {
                expected: "USD".to_string(),
                found: "EUR".to_string()
            }
        );
    }

    #[tokio::test]
    async fn fetch_rejects_invalid_rates() {
        let env = StaticRateSource::new(RateTable::new(
            "USD",
            HashMap::from([("EUR".to_string(), -1.0)]),
        ));
        let err = fetch_rates::<StaticRateSource>("USD")
            .run(&env)
            .await
            .unwrap_err();
        assert!(matches!(err, RateError::Invalid(ref errors) if errors.len() == 1));
    }
}
