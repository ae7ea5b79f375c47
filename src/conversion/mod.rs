//! Unit conversion across seven domains.
//!
//! Every domain converts through a base unit: `to_base` on the source unit,
//! then `from_base` on the target. Unknown unit names behave as the base
//! unit unless a strict [`UnitFallback`] is requested.
//!
//! # Example
//!
//! ```rust
//! use quantum_calc::conversion::{Domain, UnitConverter};
//!
//! let converter = UnitConverter::new();
//!
//! let km = converter.convert(Domain::Length, 1.0, "Miles", "Kilometers");
//! assert!((km - 1.60934).abs() < 1e-9);
//!
//! assert_eq!(converter.convert(Domain::Temperature, 100.0, "Celsius", "Fahrenheit"), 212.0);
//! assert_eq!(converter.convert(Domain::Length, 5.0, "Meters", "Parsecs"), 5.0);
//! ```

mod display;
mod error;
pub mod tables;

pub use display::{format_conversion, parse_input, DISPLAY_WIDTH};
pub use error::ConversionError;

use crate::config::{EngineConfig, UnitFallback};
use crate::currency::{CurrencyDesk, RateTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of units that convert into each other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Domain {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
    Currency,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Area,
        Self::Volume,
        Self::Speed,
        Self::Currency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
            Self::Area => "Area",
            Self::Volume => "Volume",
            Self::Speed => "Speed",
            Self::Currency => "Currency",
        }
    }

    /// Unit every conversion in the domain passes through.
    pub fn base_unit(self) -> &'static str {
        match self {
            Self::Length => "Meters",
            Self::Weight => "Kilograms",
            Self::Temperature => "Celsius",
            Self::Area => "Square Meters",
            Self::Volume => "Liters",
            Self::Speed => "km/h",
            Self::Currency => "USD",
        }
    }

    /// Fixed table for the domain; `None` for currency, whose rates are
    /// supplied at runtime.
    pub fn static_scale(self) -> Option<&'static dyn UnitScale> {
        match self {
            Self::Length => Some(&tables::LENGTH),
            Self::Weight => Some(&tables::WEIGHT),
            Self::Temperature => Some(&tables::TEMPERATURE),
            Self::Area => Some(&tables::AREA),
            Self::Volume => Some(&tables::VOLUME),
            Self::Speed => Some(&tables::SPEED),
            Self::Currency => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion through a common base unit.
pub trait UnitScale: Send + Sync {
    fn domain(&self) -> Domain;

    /// Unit names in display order.
    fn units(&self) -> Vec<&str>;

    fn knows(&self, unit: &str) -> bool;

    /// Express `value` in the base unit. Unknown units are taken as base.
    fn to_base(&self, value: f64, unit: &str) -> f64;

    /// Express a base-unit `value` in `unit`. Unknown units are taken as base.
    fn from_base(&self, value: f64, unit: &str) -> f64;

    fn convert(&self, value: f64, from: &str, to: &str) -> f64 {
        self.from_base(self.to_base(value, from), to)
    }

    /// Convert, rejecting unknown units when the policy is strict.
    fn try_convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        policy: UnitFallback,
    ) -> Result<f64, ConversionError> {
        if policy == UnitFallback::Strict {
            for unit in [from, to] {
                if !self.knows(unit) {
                    return Err(ConversionError::UnknownUnit {
                        domain: self.domain(),
                        unit: unit.to_string(),
                    });
                }
            }
        }
        Ok(self.convert(value, from, to))
    }
}

/// Converter for all seven domains.
///
/// Owns the currency desk, so rate refreshes and conversions go through the
/// same value.
pub struct UnitConverter {
    unit_policy: UnitFallback,
    currency: CurrencyDesk,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            unit_policy: config.fallback.unit,
            currency: CurrencyDesk::new(config),
        }
    }

    pub fn currency(&self) -> &CurrencyDesk {
        &self.currency
    }

    pub fn currency_mut(&mut self) -> &mut CurrencyDesk {
        &mut self.currency
    }

    /// Replace the currency rates in one assignment.
    pub fn set_rates(&mut self, rates: RateTable) {
        self.currency.replace_rates(rates);
    }

    pub fn scale(&self, domain: Domain) -> &dyn UnitScale {
        match domain.static_scale() {
            Some(scale) => scale,
            None => self.currency.table() as &dyn UnitScale,
        }
    }

    pub fn units(&self, domain: Domain) -> Vec<&str> {
        self.scale(domain).units()
    }

    /// Convert with every fallback lenient. Never fails.
    pub fn convert(&self, domain: Domain, value: f64, from: &str, to: &str) -> f64 {
        self.scale(domain).convert(value, from, to)
    }

    /// Convert under the configured policies.
    pub fn try_convert(
        &self,
        domain: Domain,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<f64, ConversionError> {
        match domain {
            Domain::Currency => self.currency.try_convert(value, from, to),
            _ => self
                .scale(domain)
                .try_convert(value, from, to, self.unit_policy),
        }
    }

    /// Parse converter input text, convert it, and format the result the way
    /// a converter screen shows it. Empty input gives an empty string.
    pub fn convert_text(
        &self,
        domain: Domain,
        input: &str,
        from: &str,
        to: &str,
    ) -> Result<String, ConversionError> {
        match parse_input(input)? {
            Some(value) => Ok(format_conversion(self.try_convert(domain, value, from, to)?)),
            None => Ok(String::new()),
        }
    }
}
