//! Closed sets of binary operators and scientific functions.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;

/// Binary operators the accumulator understands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Keypad symbol, also used in history entries.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division and modulo by zero are not trapped: they produce infinity or
    /// NaN exactly as the hardware does.
    pub fn apply(self, stored: f64, value: f64) -> f64 {
        match self {
            Self::Add => stored + value,
            Self::Subtract => stored - value,
            Self::Multiply => stored * value,
            Self::Divide => stored / value,
            Self::Modulo => stored % value,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary scientific functions and constants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
    Pi,
    E,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 9] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Square,
        Self::Pi,
        Self::E,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Resolve a function by name. `pow` is the keypad's name for squaring.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pow" => Some(Self::Square),
            _ => Self::ALL.into_iter().find(|f| f.name() == name),
        }
    }

    /// Evaluate on `value`. Trigonometric functions take degrees.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.to_radians().sin(),
            Self::Cos => value.to_radians().cos(),
            Self::Tan => value.to_radians().tan(),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Pi => PI,
            Self::E => E,
        }
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
