//! Currency conversion backed by an externally supplied rate table.
//!
//! The rate table is produced by a [`RateSource`] (any transport) through
//! the [`fetch_rates`] effect and installed on a [`CurrencyDesk`], which
//! exposes it to the converter as the currency [`UnitScale`].
//!
//! [`UnitScale`]: crate::conversion::UnitScale

mod desk;
mod error;
mod rates;
mod source;

pub use desk::{CurrencyDesk, CurrencyTable, RateFetch};
pub use error::RateError;
pub use rates::RateTable;
pub use source::{fetch_rates, RateSource, StaticRateSource};

/// Currencies offered by default, base first.
pub const SUPPORTED_CURRENCIES: [&str; 9] =
    ["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "INR"];

/// Whether `code` looks like an ISO 4217 code: three uppercase ASCII letters.
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_currency_codes() {
        assert!(SUPPORTED_CURRENCIES.iter().all(|c| is_currency_code(c)));
        assert!(!is_currency_code("usd"));
        assert!(!is_currency_code("US"));
        assert!(!is_currency_code("USDT"));
        assert!(!is_currency_code("U$D"));
    }
}
