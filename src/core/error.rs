//! Calculator errors.

use thiserror::Error;

/// Errors raised by calculator transitions.
///
/// Under the default lenient policy no transition produces one.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Display '{text}' is not a number")]
    InvalidNumber { text: String },
}
