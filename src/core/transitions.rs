//! Pure accumulator transitions.
//!
//! Each function takes the current state by reference and returns the next
//! one. Transitions that complete an operation also return the history line
//! to record; the `Calculator` shell does the recording.

use super::error::CalcError;
use super::number::{parse_display, render};
use super::operator::{Operator, ScientificFn};
use super::state::CalculatorState;
use crate::config::{HistoryStyle, ParseFallback};

/// Next state plus the history line the transition produced, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CalculatorState,
    pub record: Option<String>,
}

impl Step {
    fn silent(state: CalculatorState) -> Self {
        Self {
            state,
            record: None,
        }
    }
}

/// Display text the next key press edits, honoring a pending fresh entry.
fn current_entry(state: &CalculatorState) -> &str {
    if state.awaiting_fresh_entry {
        "0"
    } else {
        &state.display
    }
}

/// Append one digit. Characters other than ASCII digits leave the state
/// unchanged.
pub fn append_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !digit.is_ascii_digit() {
        return state.clone();
    }
    let entry = current_entry(state);
    let display = if entry == "0" {
        digit.to_string()
    } else {
        format!("{entry}{digit}")
    };
    CalculatorState {
        display,
        awaiting_fresh_entry: false,
        ..state.clone()
    }
}

/// Append a decimal point unless the entry already has one. Exponent and
/// non-finite renderings are left alone.
pub fn append_decimal_point(state: &CalculatorState) -> CalculatorState {
    let entry = current_entry(state);
    if entry.contains('.') || entry.chars().any(|c| c.is_ascii_alphabetic()) {
        return state.clone();
    }
    CalculatorState {
        display: format!("{entry}."),
        awaiting_fresh_entry: false,
        ..state.clone()
    }
}

/// Record `op` as pending, first folding in any operator already pending.
///
/// Chains evaluate left to right: `3 + 4 + 5` is `(3 + 4) + 5`.
pub fn choose_operator(
    state: &CalculatorState,
    op: Operator,
    policy: ParseFallback,
) -> Result<CalculatorState, CalcError> {
    let value = parse_display(&state.display, policy)?;
    let stored = match state.pending {
        None => value,
        Some(pending) => pending.apply(state.stored, value),
    };
    Ok(CalculatorState {
        display: state.display.clone(),
        stored,
        pending: Some(op),
        awaiting_fresh_entry: true,
    })
}

/// Apply the pending operator and show the result. Without a pending
/// operator this is a no-op.
pub fn compute_result(
    state: &CalculatorState,
    policy: ParseFallback,
    style: HistoryStyle,
) -> Result<Step, CalcError> {
    let Some(op) = state.pending else {
        return Ok(Step::silent(state.clone()));
    };

    let value = parse_display(&state.display, policy)?;
    let before = state.stored;
    let stored = op.apply(before, value);
    let display = render(stored);

    let right = match style {
        HistoryStyle::Legacy => display.clone(),
        HistoryStyle::Corrected => render(value),
    };
    let record = format!("{} {} {} = {}", render(before), op, right, display);

    Ok(Step {
        state: CalculatorState {
            display,
            stored,
            pending: None,
            awaiting_fresh_entry: state.awaiting_fresh_entry,
        },
        record: Some(record),
    })
}

/// Back to the session start state. History is not part of the state and
/// is therefore untouched.
pub fn clear() -> CalculatorState {
    CalculatorState::new()
}

/// Drop the last character; never leaves the display empty.
pub fn backspace(state: &CalculatorState) -> CalculatorState {
    let mut display = state.display.clone();
    display.pop();
    if display.is_empty() {
        display.push('0');
    }
    CalculatorState {
        display,
        ..state.clone()
    }
}

/// Flip the sign of the display. Unparseable text resets it to `"0"`.
pub fn negate(state: &CalculatorState) -> CalculatorState {
    let display = match state.display.parse::<f64>() {
        Ok(value) => render(value * -1.0),
        Err(_) => "0".to_string(),
    };
    CalculatorState {
        display,
        ..state.clone()
    }
}

/// Apply a scientific function to the display.
pub fn scientific(
    state: &CalculatorState,
    function: ScientificFn,
    policy: ParseFallback,
) -> Result<Step, CalcError> {
    let value = parse_display(&state.display, policy)?;
    let result = function.apply(value);
    Ok(record_unary(state, function.name(), value, result))
}

/// Apply a scientific function chosen by name.
///
/// Names that resolve to no function pass the input through unchanged,
/// still producing a history line.
pub fn scientific_by_name(
    state: &CalculatorState,
    name: &str,
    policy: ParseFallback,
) -> Result<Step, CalcError> {
    match ScientificFn::from_name(name) {
        Some(function) => scientific(state, function, policy),
        None => {
            let value = parse_display(&state.display, policy)?;
            Ok(record_unary(state, name, value, value))
        }
    }
}

fn record_unary(state: &CalculatorState, name: &str, input: f64, result: f64) -> Step {
    let display = render(result);
    let record = format!("{}({}) = {}", name, render(input), display);
    Step {
        state: CalculatorState {
            display,
            ..state.clone()
        },
        record: Some(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const LENIENT: ParseFallback = ParseFallback::LenientZero;

    fn with_display(display: &str) -> CalculatorState {
        CalculatorState {
            display: display.to_string(),
            ..CalculatorState::new()
        }
    }

    fn digits(state: &CalculatorState, keys: &str) -> CalculatorState {
        keys.chars().fold(state.clone(), |s, d| append_digit(&s, d))
    }

    #[test]
    fn digits_replace_leading_zero_then_append() {
        let state = digits(&CalculatorState::new(), "53");
        assert_eq!(state.display, "53");

        let state = digits(&CalculatorState::new(), "0007");
        assert_eq!(state.display, "7");
    }

    #[test]
    fn non_digits_are_ignored() {
        let state = append_digit(&with_display("12"), '(');
        assert_eq!(state.display, "12");
    }

    #[test]
    fn fresh_entry_replaces_display() {
        let state = CalculatorState {
            display: "12".to_string(),
            awaiting_fresh_entry: true,
            ..CalculatorState::new()
        };
        let next = append_digit(&state, '4');
        assert_eq!(next.display, "4");
        assert!(!next.awaiting_fresh_entry);
    }

    #[test]
    fn decimal_point_is_added_once() {
        let state = append_decimal_point(&CalculatorState::new());
        assert_eq!(state.display, "0.");
        let state = append_digit(&state, '5');
        assert_eq!(state.display, "0.5");
        let state = append_decimal_point(&state);
        assert_eq!(state.display, "0.5");
    }

    #[test]
    fn decimal_point_leaves_exponent_and_non_finite_results() {
        for display in ["1.0e-5", "Infinity", "-Infinity", "NaN"] {
            let state = CalculatorState {
                display: display.to_string(),
                ..CalculatorState::new()
            };
            assert_eq!(append_decimal_point(&state), state);
        }
    }

    #[test]
    fn decimal_point_starts_fresh_entry() {
        let state = CalculatorState {
            display: "1.5".to_string(),
            awaiting_fresh_entry: true,
            ..CalculatorState::new()
        };
        let next = append_decimal_point(&state);
        assert_eq!(next.display, "0.");
        assert!(!next.awaiting_fresh_entry);
    }

    #[test]
    fn first_operator_stores_display() {
        let state = choose_operator(&with_display("8"), Operator::Add, LENIENT).unwrap();
        assert_eq!(state.stored, 8.0);
        assert_eq!(state.pending, Some(Operator::Add));
        assert!(state.awaiting_fresh_entry);
        assert_eq!(state.display, "8");
    }

    #[test]
    fn second_operator_folds_pending_one() {
        let state = choose_operator(&with_display("3"), Operator::Add, LENIENT).unwrap();
        let state = digits(&state, "4");
        let state = choose_operator(&state, Operator::Multiply, LENIENT).unwrap();
        assert_eq!(state.stored, 7.0);
        assert_eq!(state.pending, Some(Operator::Multiply));
    }

    #[test]
    fn compute_without_operator_is_noop() {
        let state = with_display("9");
        let step = compute_result(&state, LENIENT, HistoryStyle::Legacy).unwrap();
        assert_eq!(step.state, state);
        assert_eq!(step.record, None);
    }

    #[test]
    fn compute_writes_legacy_history_line() {
        let state = choose_operator(&with_display("7"), Operator::Add, LENIENT).unwrap();
        let state = digits(&state, "5");
        let step = compute_result(&state, LENIENT, HistoryStyle::Legacy).unwrap();

        assert_eq!(step.state.display, "12.0");
        assert_eq!(step.state.stored, 12.0);
        assert_eq!(step.state.pending, None);
        assert_eq!(step.record.as_deref(), Some("7.0 + 12.0 = 12.0"));
    }

    #[test]
    fn compute_writes_corrected_history_line() {
        let state = choose_operator(&with_display("7"), Operator::Add, LENIENT).unwrap();
        let state = digits(&state, "5");
        let step = compute_result(&state, LENIENT, HistoryStyle::Corrected).unwrap();

        assert_eq!(step.record.as_deref(), Some("7.0 + 5.0 = 12.0"));
    }

    #[test]
    fn division_by_zero_shows_infinity() {
        let state = choose_operator(&with_display("10"), Operator::Divide, LENIENT).unwrap();
        let state = digits(&state, "0");
        let step = compute_result(&state, LENIENT, HistoryStyle::Legacy).unwrap();
        assert_eq!(step.state.display, "Infinity");
    }

    #[test]
    fn strict_policy_rejects_bad_display() {
        let state = with_display("1.");
        assert!(choose_operator(&state, Operator::Add, ParseFallback::Strict).is_ok());

        let bad = with_display("Infinity5");
        let err = choose_operator(&bad, Operator::Add, ParseFallback::Strict).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidNumber {
                text: "Infinity5".to_string()
            }
        );
        let lenient = choose_operator(&bad, Operator::Add, LENIENT).unwrap();
        assert_eq!(lenient.stored, 0.0);
    }

    #[test]
    fn clear_resets_everything() {
        assert_eq!(clear(), CalculatorState::new());
    }

    #[test]
    fn backspace_never_empties_display() {
        assert_eq!(backspace(&with_display("123")).display, "12");
        assert_eq!(backspace(&with_display("7")).display, "0");
        assert_eq!(backspace(&with_display("0")).display, "0");
    }

    #[test]
    fn negate_flips_sign() {
        assert_eq!(negate(&with_display("5")).display, "-5.0");
        assert_eq!(negate(&with_display("-2.5")).display, "2.5");
        assert_eq!(negate(&with_display("abc")).display, "0");
    }

    #[test]
    fn scientific_records_input_and_result() {
        let step = scientific(&with_display("16"), ScientificFn::Sqrt, LENIENT).unwrap();
        assert_eq!(step.state.display, "4.0");
        assert_eq!(step.record.as_deref(), Some("sqrt(16.0) = 4.0"));
    }

    #[test]
    fn pi_ignores_display() {
        for display in ["0", "42", "-7.5"] {
            let step = scientific(&with_display(display), ScientificFn::Pi, LENIENT).unwrap();
            assert_eq!(step.state.display, render(PI));
        }
    }

    #[test]
    fn unknown_function_passes_input_through() {
        let step = scientific_by_name(&with_display("3"), "cosh", LENIENT).unwrap();
        assert_eq!(step.state.display, "3.0");
        assert_eq!(step.record.as_deref(), Some("cosh(3.0) = 3.0"));
    }

    #[test]
    fn pow_name_squares() {
        let step = scientific_by_name(&with_display("3"), "pow", LENIENT).unwrap();
        assert_eq!(step.state.display, "9.0");
        assert_eq!(step.record.as_deref(), Some("square(3.0) = 9.0"));
    }
}
