//! Pure accumulator core.
//!
//! This module contains the calculator's data and the pure functions over it:
//! - `CalculatorState` and its `Phase`
//! - closed `Operator` and `ScientificFn` sets
//! - display parsing and rendering
//! - the append-only `CalculationHistory`
//!
//! Nothing here holds mutable state of its own; the `engine` module is the
//! imperative shell that owns a state and applies these transitions.

mod error;
mod history;
mod number;
mod operator;
mod state;
pub mod transitions;

pub use error::CalcError;
pub use history::{CalculationHistory, HistoryEntry};
pub use number::{parse_display, render};
pub use operator::{Operator, ScientificFn};
pub use state::{CalculatorState, Phase, State};
pub use transitions::Step;
