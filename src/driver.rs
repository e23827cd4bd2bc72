//! Unified keypad driver.
//!
//! Write the verification logic once, run it against any front end: the
//! bare engine and the TUI app both implement [`KeypadDriver`], so the
//! `verify_*` specifications below exercise either one unchanged.

use crate::core::{CalcEvent, Operator};

/// Abstract driver trait for keypad-level interaction.
///
/// Implementations feed events to a calculator and expose the text a
/// user would see, so the same scenario can be checked against every
/// front end.
pub trait KeypadDriver {
    /// Feeds one keypad event.
    fn press(&mut self, event: CalcEvent);

    /// Returns the grouped display text.
    fn display(&self) -> String;

    /// Returns the running-equation preview.
    fn equation(&self) -> String;

    /// Resets to the idle state.
    fn clear(&mut self);

    /// Returns history entries, newest first.
    fn history(&self) -> Vec<HistoryItem>;

    /// Feeds a sequence of events.
    fn press_all(&mut self, events: &[CalcEvent]) {
        for &event in events {
            self.press(event);
        }
    }

    /// Types a run of digits, most significant first.
    fn type_digits(&mut self, digits: &[u8]) {
        for &d in digits {
            self.press(CalcEvent::Digit(d));
        }
    }
}

/// A simplified history item for driver results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expanded equation.
    pub equation: String,
    /// The result as display text.
    pub result: String,
}

/// Driver over the bare engine, no front end attached.
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    calc: crate::core::Calculator,
}

impl EngineDriver {
    /// Creates a driver over a fresh calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator.
    #[must_use]
    pub fn calculator(&self) -> &crate::core::Calculator {
        &self.calc
    }
}

impl KeypadDriver for EngineDriver {
    fn press(&mut self, event: CalcEvent) {
        self.calc.press(event);
    }

    fn display(&self) -> String {
        self.calc.display_text()
    }

    fn equation(&self) -> String {
        self.calc.equation_text().to_string()
    }

    fn clear(&mut self) {
        self.calc.press_clear();
    }

    fn history(&self) -> Vec<HistoryItem> {
        self.calc
            .history()
            .iter_rev()
            .map(|entry| HistoryItem {
                equation: entry.equation.clone(),
                result: entry.result.clone(),
            })
            .collect()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{HistoryItem, KeypadDriver};
    use crate::core::CalcEvent;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, event: CalcEvent) {
            self.app.calculator_mut().press(event);
        }

        fn display(&self) -> String {
            self.app.display_text()
        }

        fn equation(&self) -> String {
            self.app.equation_text().to_string()
        }

        fn clear(&mut self) {
            self.app.calculator_mut().press_clear();
        }

        fn history(&self) -> Vec<HistoryItem> {
            self.app
                .calculator()
                .history()
                .iter_rev()
                .map(|entry| HistoryItem {
                    equation: entry.equation.clone(),
                    result: entry.result.clone(),
                })
                .collect()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These checks work with ANY KeypadDriver implementation

/// Verifies digit entry, leading-zero collapse, and decimals.
pub fn verify_digit_entry<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits(&[0, 0, 7]);
    assert_eq!(driver.display(), "7");

    driver.press(CalcEvent::Decimal);
    driver.press(CalcEvent::Digit(5));
    driver.press(CalcEvent::Decimal);
    assert_eq!(driver.display(), "7.5");
    driver.clear();
}

/// Verifies strict left-to-right chaining without precedence.
pub fn verify_chained_evaluation<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.press(CalcEvent::Digit(2));
    driver.press(CalcEvent::Operator(Operator::Add));
    driver.press(CalcEvent::Digit(3));
    driver.press(CalcEvent::Operator(Operator::Multiply));
    assert_eq!(driver.display(), "5");
    driver.press(CalcEvent::Digit(4));
    driver.press(CalcEvent::Equals);
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.equation(), "5×4");
    driver.clear();
}

/// Verifies the error sentinel and the Clear-only escape.
pub fn verify_division_by_zero<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.press(CalcEvent::Digit(8));
    driver.press(CalcEvent::Operator(Operator::Divide));
    driver.press(CalcEvent::Digit(0));
    driver.press(CalcEvent::Equals);
    assert_eq!(driver.display(), "Error");

    driver.press(CalcEvent::Digit(5));
    driver.press(CalcEvent::Negate);
    assert_eq!(driver.display(), "Error");

    driver.press(CalcEvent::Clear);
    assert_eq!(driver.display(), "0");
}

/// Verifies thousands grouping on both panes.
pub fn verify_grouped_display<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(driver.display(), "1,234,567");
    driver.press(CalcEvent::Operator(Operator::Subtract));
    assert_eq!(driver.equation(), "1,234,567−");
    driver.clear();
}

/// Verifies percent and sign flip.
pub fn verify_percent_and_negate<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits(&[5, 0]);
    driver.press(CalcEvent::Percent);
    assert_eq!(driver.display(), "0.5");
    driver.press(CalcEvent::Negate);
    assert_eq!(driver.display(), "-0.5");
    driver.clear();
}

/// Verifies backspace never empties the display.
pub fn verify_backspace_floor<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits(&[4, 2]);
    driver.press(CalcEvent::Backspace);
    assert_eq!(driver.display(), "4");
    driver.press(CalcEvent::Backspace);
    driver.press(CalcEvent::Backspace);
    assert_eq!(driver.display(), "0");
}

/// Verifies history bookkeeping across computations.
pub fn verify_history<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&[
        CalcEvent::Digit(1),
        CalcEvent::Operator(Operator::Add),
        CalcEvent::Digit(1),
        CalcEvent::Equals,
        CalcEvent::Digit(2),
        CalcEvent::Operator(Operator::Add),
        CalcEvent::Digit(2),
        CalcEvent::Equals,
    ]);

    let history = driver.history();
    assert!(history.len() >= 2);
    // Most recent first
    assert_eq!(history[0].equation, "2+2");
    assert_eq!(history[0].result, "4");
}

/// Complete verification suite - runs all specifications.
pub fn run_full_specification<D: KeypadDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_chained_evaluation(driver);
    verify_division_by_zero(driver);
    verify_grouped_display(driver);
    verify_percent_and_negate(driver);
    verify_backspace_floor(driver);
    verify_history(driver);
}
