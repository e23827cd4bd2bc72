//! Chaincalc - a four-function calculator engine with a terminal front end.
//!
//! The engine is a pure event reducer: each keypad event maps the current
//! [`core::EngineState`] to a successor state, with no interior mutation.
//! Left-to-right chaining (no operator precedence), a tagged error
//! sentinel for division by zero, thousands-grouped display text, and a
//! bounded computation history sit on top of that single transition
//! function.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_digit(2);
//! calc.press_operator(Operator::Add);
//! calc.press_digit(3);
//! calc.press_operator(Operator::Multiply);
//! calc.press_digit(4);
//! calc.press_equals();
//!
//! // Chained left to right: (2 + 3) × 4
//! assert_eq!(calc.display_text(), "20");
//! assert_eq!(calc.equation_text(), "5×4");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        CalcError, CalcEvent, CalcResult, Calculator, DisplayValue, EngineState, Evaluator,
        Operator, Rounding, ERROR_TEXT,
    };
    pub use crate::driver::{EngineDriver, HistoryItem, KeypadDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
