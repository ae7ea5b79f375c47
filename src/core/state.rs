//! Calculator state and the `State` trait shared by the crate's lifecycles.
//!
//! `CalculatorState` is a plain owned value. Nothing in this module mutates
//! it in place; the transitions in `core::transitions` return new values.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle phases that can be named and inspected.
///
/// Implemented by the calculator's [`Phase`] and by the currency desk's
/// rate fetch lifecycle, so both can be logged the same way.
///
/// # Example
///
/// ```rust
/// use quantum_calc::core::{Operator, Phase, State};
///
/// let phase = Phase::PendingOp(Operator::Add);
/// assert_eq!(phase.name(), "PendingOp");
/// assert!(!phase.is_final());
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this phase.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this phase represents a failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Where the accumulator is in its `Idle -> PendingOp -> Idle` cycle.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operator chosen.
    Idle,
    /// An operator was chosen and awaits its right operand.
    PendingOp(Operator),
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::PendingOp(_) => "PendingOp",
        }
    }
}

/// The accumulator's complete mutable state.
///
/// `display` always parses as a number (the renderings `Infinity`,
/// `-Infinity` and `NaN` included) or is the literal `"0"`, as long as it is
/// only changed through the crate's transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Current entry or last result, as shown to the user.
    pub display: String,
    /// Left operand of the pending operation.
    #[serde(with = "super::number::as_text")]
    pub stored: f64,
    /// Operator waiting for its right operand.
    pub pending: Option<Operator>,
    /// Next digit replaces the display instead of appending to it.
    pub awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// `stored` compares bit for bit, so a NaN accumulator equals itself.
impl PartialEq for CalculatorState {
    fn eq(&self, other: &Self) -> bool {
        self.display == other.display
            && self.stored.to_bits() == other.stored.to_bits()
            && self.pending == other.pending
            && self.awaiting_fresh_entry == other.awaiting_fresh_entry
    }
}

impl CalculatorState {
    /// Session start state: display `"0"`, nothing stored, nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            stored: 0.0,
            pending: None,
            awaiting_fresh_entry: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(op) => Phase::PendingOp(op),
            None => Phase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_idle_at_zero() {
        let state = CalculatorState::new();
        assert_eq!(state.display, "0");
        assert_eq!(state.stored, 0.0);
        assert_eq!(state.pending, None);
        assert!(!state.awaiting_fresh_entry);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn nan_accumulator_equals_itself() {
        let state = CalculatorState {
            display: "NaN".to_string(),
            stored: f64::NAN,
            ..CalculatorState::new()
        };
        assert_eq!(state, state.clone());

        let other = CalculatorState {
            stored: 1.0,
            ..state.clone()
        };
        assert_ne!(state, other);
    }

    #[test]
    fn phase_follows_pending_operator() {
        let state = CalculatorState {
            pending: Some(Operator::Divide),
            ..CalculatorState::new()
        };
        assert_eq!(state.phase(), Phase::PendingOp(Operator::Divide));
        assert_eq!(state.phase().name(), "PendingOp");
    }

    #[test]
    fn phases_are_never_final_or_error() {
        for phase in [Phase::Idle, Phase::PendingOp(Operator::Add)] {
            assert!(!phase.is_final());
            assert!(!phase.is_error());
        }
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState {
            display: "42".to_string(),
            stored: 7.5,
            pending: Some(Operator::Multiply),
            awaiting_fresh_entry: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn infinite_stored_value_survives_json() {
        let state = CalculatorState {
            display: "Infinity".to_string(),
            stored: f64::INFINITY,
            ..CalculatorState::new()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""stored":"Infinity""#));
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.stored, f64::INFINITY);
    }
}
