//! Binary operators and the pure arithmetic evaluator.
//!
//! Evaluation is strictly left-to-right with no precedence: the engine
//! never parses expressions, it only ever applies one pending operator
//! to two operands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four binary operators.
///
/// A closed enum: no unrecognized operator can reach [`Evaluator::apply`],
/// so the dispatch is total over its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All four operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the display symbol used in the equation preview.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the display symbol as a single character.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps an input character to an operator.
    ///
    /// Accepts both the ASCII forms typed on a keyboard and the display
    /// glyphs shown on the keypad.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Pure binary arithmetic over the four operators.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Applies `op` to the captured left operand and the current one.
    ///
    /// Division by a zero right operand is the single failure mode.
    pub fn apply(prev: f64, current: f64, op: Operator) -> CalcResult<f64> {
        match op {
            Operator::Add => Ok(Self::add(prev, current)),
            Operator::Subtract => Ok(Self::subtract(prev, current)),
            Operator::Multiply => Ok(Self::multiply(prev, current)),
            Operator::Divide => Self::divide(prev, current),
        }
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a / b, failing when b is zero
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}
