//! The calculator shell around the pure core.
//!
//! `Calculator` owns one `CalculatorState` and one `CalculationHistory`,
//! applies the pure transitions from `core::transitions`, records the lines
//! they produce, logs every step, and notifies subscribers.
//!
//! # Example
//!
//! ```rust
//! use quantum_calc::core::Operator;
//! use quantum_calc::engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('3');
//! calc.choose_operator(Operator::Add).unwrap();
//! calc.append_digit('4');
//! calc.choose_operator(Operator::Add).unwrap();
//! calc.append_digit('5');
//! calc.compute_result().unwrap();
//!
//! assert_eq!(calc.display(), "12.0");
//! assert_eq!(calc.history().len(), 1);
//! ```

mod listener;

pub use listener::{Listener, SubscriptionId};

use crate::config::{EngineConfig, HistoryStyle, ParseFallback};
use crate::core::transitions::{self, Step};
use crate::core::{
    CalcError, CalculationHistory, CalculatorState, HistoryEntry, Operator, Phase, ScientificFn,
    State,
};
use crate::snapshot::SessionSnapshot;
use tracing::debug;

/// A calculator session.
pub struct Calculator {
    state: CalculatorState,
    history: CalculationHistory,
    parse_policy: ParseFallback,
    history_style: HistoryStyle,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Start a session with the default (lenient, legacy history) settings.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            history: CalculationHistory::new(),
            parse_policy: config.fallback.parse,
            history_style: config.history_style,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// Register a listener called after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&CalculatorState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Listener::new(callback)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    pub fn append_digit(&mut self, digit: char) {
        let next = transitions::append_digit(&self.state, digit);
        self.apply("append_digit", Step { state: next, record: None });
    }

    pub fn append_decimal_point(&mut self) {
        let next = transitions::append_decimal_point(&self.state);
        self.apply("append_decimal_point", Step { state: next, record: None });
    }

    pub fn choose_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let next = transitions::choose_operator(&self.state, op, self.parse_policy)?;
        self.apply("choose_operator", Step { state: next, record: None });
        Ok(())
    }

    pub fn compute_result(&mut self) -> Result<(), CalcError> {
        let step = transitions::compute_result(&self.state, self.parse_policy, self.history_style)?;
        self.apply("compute_result", step);
        Ok(())
    }

    /// Reset the entry and any pending operation. History is kept.
    pub fn clear(&mut self) {
        self.apply(
            "clear",
            Step {
                state: transitions::clear(),
                record: None,
            },
        );
    }

    pub fn backspace(&mut self) {
        let next = transitions::backspace(&self.state);
        self.apply("backspace", Step { state: next, record: None });
    }

    pub fn negate(&mut self) {
        let next = transitions::negate(&self.state);
        self.apply("negate", Step { state: next, record: None });
    }

    pub fn scientific(&mut self, function: ScientificFn) -> Result<(), CalcError> {
        let step = transitions::scientific(&self.state, function, self.parse_policy)?;
        self.apply("scientific", step);
        Ok(())
    }

    pub fn scientific_by_name(&mut self, name: &str) -> Result<(), CalcError> {
        let step = transitions::scientific_by_name(&self.state, name, self.parse_policy)?;
        self.apply("scientific", step);
        Ok(())
    }

    /// Capture state and history for the caller to persist.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.state, &self.history)
    }

    /// Replace state and history with a snapshot's. Listeners are notified.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        debug!(snapshot = %snapshot.id, entries = snapshot.history.len(), "restoring session");
        self.history = snapshot.history;
        self.state = snapshot.state;
        self.notify();
    }

    fn apply(&mut self, action: &str, step: Step) {
        let changed = step.state != self.state || step.record.is_some();

        if let Some(text) = step.record {
            debug!(action, entry = %text, "recording history");
            self.history.push(HistoryEntry::now(text));
        }

        if changed {
            let phase = step.state.phase();
            debug!(
                action,
                phase = phase.name(),
                display = %step.state.display,
                "applied transition"
            );
            self.state = step.state;
            self.notify();
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener.notify(&self.state);
        }
    }
}
