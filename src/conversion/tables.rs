//! Fixed conversion tables for the six static domains.

use super::{Domain, UnitScale};

/// A domain whose units are plain multiples of the base unit.
///
/// Each entry is a unit name and how many base units one of it is.
#[derive(Debug)]
pub struct LinearScale {
    domain: Domain,
    factors: &'static [(&'static str, f64)],
}

impl LinearScale {
    fn factor(&self, unit: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }
}

impl UnitScale for LinearScale {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn units(&self) -> Vec<&str> {
        self.factors.iter().map(|(name, _)| *name).collect()
    }

    fn knows(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }

    fn to_base(&self, value: f64, unit: &str) -> f64 {
        match self.factor(unit) {
            Some(factor) => value * factor,
            None => value,
        }
    }

    fn from_base(&self, value: f64, unit: &str) -> f64 {
        match self.factor(unit) {
            Some(factor) => value / factor,
            None => value,
        }
    }
}

pub static LENGTH: LinearScale = LinearScale {
    domain: Domain::Length,
    factors: &[
        ("Meters", 1.0),
        ("Feet", 0.3048),
        ("Inches", 0.0254),
        ("Centimeters", 0.01),
        ("Yards", 0.9144),
        ("Miles", 1609.34),
        ("Kilometers", 1000.0),
    ],
};

/// Tons are metric tons.
pub static WEIGHT: LinearScale = LinearScale {
    domain: Domain::Weight,
    factors: &[
        ("Kilograms", 1.0),
        ("Pounds", 0.453592),
        ("Ounces", 0.0283495),
        ("Grams", 0.001),
        ("Stones", 6.35029),
        ("Tons", 1000.0),
    ],
};

pub static AREA: LinearScale = LinearScale {
    domain: Domain::Area,
    factors: &[
        ("Square Meters", 1.0),
        ("Square Feet", 0.092903),
        ("Acres", 4046.86),
        ("Hectares", 10000.0),
        ("Square Miles", 2589988.11),
    ],
};

/// Gallons are US gallons.
pub static VOLUME: LinearScale = LinearScale {
    domain: Domain::Volume,
    factors: &[
        ("Liters", 1.0),
        ("Gallons", 3.78541),
        ("Cubic Meters", 1000.0),
        ("Cubic Feet", 28.3168),
        ("Milliliters", 0.001),
    ],
};

pub static SPEED: LinearScale = LinearScale {
    domain: Domain::Speed,
    factors: &[
        ("km/h", 1.0),
        ("mph", 1.60934),
        ("m/s", 3.6),
        ("knots", 1.852),
        ("ft/s", 1.09728),
    ],
};

/// Celsius-based temperature scale. Conversions are affine, so this cannot
/// be a `LinearScale`.
#[derive(Debug)]
pub struct TemperatureScale;

pub static TEMPERATURE: TemperatureScale = TemperatureScale;

const TEMPERATURE_UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];
const KELVIN_OFFSET: f64 = 273.15;

impl UnitScale for TemperatureScale {
    fn domain(&self) -> Domain {
        Domain::Temperature
    }

    fn units(&self) -> Vec<&str> {
        TEMPERATURE_UNITS.to_vec()
    }

    fn knows(&self, unit: &str) -> bool {
        TEMPERATURE_UNITS.contains(&unit)
    }

    fn to_base(&self, value: f64, unit: &str) -> f64 {
        match unit {
            "Fahrenheit" => (value - 32.0) * 5.0 / 9.0,
            "Kelvin" => value - KELVIN_OFFSET,
            _ => value,
        }
    }

    fn from_base(&self, value: f64, unit: &str) -> f64 {
        match unit {
            "Fahrenheit" => value * 9.0 / 5.0 + 32.0,
            "Kelvin" => value + KELVIN_OFFSET,
            _ => value,
        }
    }
}
