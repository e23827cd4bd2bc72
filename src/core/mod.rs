//! Core calculator engine: events in, display + equation strings out.
//!
//! The engine is a pure reducer over an explicit [`EngineState`] record.
//! Nothing in here touches a clock, a terminal, or any other ambient
//! state; the TUI layer drives it one event at a time.

pub mod format;
pub mod history;
mod operations;
mod state;

pub use operations::{Evaluator, Operator};
pub use state::{CalcEvent, Calculator, DisplayValue, EngineState, ERROR_TEXT};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero is the only failure the arithmetic core can produce.
/// `BadNumeral` exists for the parse helper's signature; display text is
/// constructed exclusively by the engine, so it never escapes in practice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Text that does not parse as a decimal numeral
    #[error("not a numeral: {0:?}")]
    BadNumeral(String),
}

/// Rounding policy applied to equals results.
///
/// Absorbs floating-point noise like `0.30000000000000004` before the
/// result is rendered. The canonical precision is two decimal places;
/// embedders can pick another via [`Rounding::places`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rounding {
    places: u32,
}

impl Rounding {
    /// The canonical policy: two decimal places.
    pub const CANONICAL: Self = Self { places: 2 };

    /// Creates a policy rounding to `places` decimal places.
    #[must_use]
    pub const fn places(places: u32) -> Self {
        Self { places }
    }

    /// Returns the number of decimal places kept.
    #[must_use]
    pub const fn decimals(self) -> u32 {
        self.places
    }

    /// Rounds a value to the configured precision.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let scale = 10f64.powi(self.places as i32);
        (value * scale).round() / scale
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Self::CANONICAL
    }
}
