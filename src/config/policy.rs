//! Named fallback policies.
//!
//! Every permissive default of the engine is one variant here, so callers
//! and tests can pick or assert the policy instead of relying on incidental
//! behavior.

use serde::{Deserialize, Serialize};

/// What happens when display text does not parse as a number.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFallback {
    /// Treat the value as `0.0`.
    #[default]
    LenientZero,
    /// Reject the operation and keep the state.
    Strict,
}

/// What happens when a conversion names a unit the domain does not know.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFallback {
    /// Treat the unit as the domain's base unit.
    #[default]
    LenientIdentity,
    Strict,
}

/// What happens when the rate table has no entry for a currency.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFallback {
    /// Use a rate of 1.0.
    #[default]
    PassThrough,
    Strict,
}

/// Layout of the history line written by `compute_result`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStyle {
    /// `<stored before> <op> <result> = <result>`: the right operand slot
    /// repeats the result, as earlier releases wrote it.
    #[default]
    Legacy,
    /// `<stored before> <op> <right operand> = <result>`.
    Corrected,
}

/// The three fallback policies together.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackPolicy {
    pub parse: ParseFallback,
    pub unit: UnitFallback,
    pub rate: RateFallback,
}

impl FallbackPolicy {
    /// Lenient everywhere. Same as `Default`.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Reject instead of falling back, everywhere.
    pub fn strict() -> Self {
        Self {
            parse: ParseFallback::Strict,
            unit: UnitFallback::Strict,
            rate: RateFallback::Strict,
        }
    }
}
