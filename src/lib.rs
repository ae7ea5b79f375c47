//! Quantum Calc: a calculator accumulator engine and unit conversion core
//!
//! The crate follows the "pure core, imperative shell" split. Every calculator
//! operation is a pure function from one `CalculatorState` to the next; the
//! `Calculator` shell owns the current state, records history, logs and
//! notifies subscribers. Unit conversion is a set of static tables plus a
//! currency desk whose rate table is fetched through an effect.
//!
//! # Core Concepts
//!
//! - **Accumulator**: a two-operand running expression with no precedence
//! - **Fallback policies**: named defaults for bad input, unknown units and
//!   missing rates
//! - **History**: an append-only log of calculation lines
//! - **Conversion**: seven domains, each converting through a base unit
//!
//! # Example
//!
//! ```rust
//! use quantum_calc::conversion::{Domain, UnitConverter};
//! use quantum_calc::core::{Operator, ScientificFn};
//! use quantum_calc::engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('1');
//! calc.append_digit('0');
//! calc.choose_operator(Operator::Divide).unwrap();
//! calc.append_digit('4');
//! calc.compute_result().unwrap();
//! assert_eq!(calc.display(), "2.5");
//!
//! calc.scientific(ScientificFn::Square).unwrap();
//! assert_eq!(calc.display(), "6.25");
//! assert_eq!(calc.history().texts(), vec!["10.0 / 2.5 = 2.5", "square(2.5) = 6.25"]);
//!
//! let converter = UnitConverter::new();
//! assert_eq!(converter.convert(Domain::Temperature, 0.0, "Celsius", "Kelvin"), 273.15);
//! ```

pub mod config;
pub mod conversion;
pub mod core;
pub mod currency;
pub mod engine;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use config::{EngineConfig, FallbackPolicy};
pub use conversion::{Domain, UnitConverter, UnitScale};
pub use crate::core::{CalculatorState, Operator, ScientificFn, State};
pub use engine::Calculator;
pub use snapshot::SessionSnapshot;
