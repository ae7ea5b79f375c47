//! State-change listeners.

use crate::core::CalculatorState;

/// Callback run after every transition that changed the calculator.
///
/// Listeners observe; they cannot alter the state they are handed.
///
/// # Example
///
/// ```rust
/// use quantum_calc::engine::Listener;
/// use quantum_calc::core::CalculatorState;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let listener = Listener::new(move |state: &CalculatorState| {
///     sink.lock().unwrap().push(state.display.clone());
/// });
///
/// listener.notify(&CalculatorState::new());
/// assert_eq!(seen.lock().unwrap().as_slice(), ["0"]);
/// ```
pub struct Listener {
    callback: Box<dyn Fn(&CalculatorState) + Send + Sync>,
}

impl Listener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&CalculatorState) + Send + Sync + 'static,
    {
        Listener {
            callback: Box::new(callback),
        }
    }

    pub fn notify(&self, state: &CalculatorState) {
        (self.callback)(state)
    }
}

/// Handle returned by `Calculator::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(pub(crate) u64);
