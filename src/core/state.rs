//! Engine state and the pure event reducer.
//!
//! One [`EngineState`] record holds everything the calculator knows;
//! every user event produces a fresh record via [`EngineState::apply_event`].
//! The [`Calculator`] façade owns the current record, the rounding policy,
//! and the history of completed computations.

use serde::{Deserialize, Serialize};

use crate::core::format;
use crate::core::history::History;
use crate::core::operations::{Evaluator, Operator};
use crate::core::Rounding;

/// The literal error sentinel shown after a division by zero.
pub const ERROR_TEXT: &str = "Error";

/// The displayed value: a decimal numeral or the error sentinel.
///
/// Carrying the sentinel as its own variant means downstream code cannot
/// accidentally parse it as a number; both the formatter and the parser
/// switch on this tag, never on string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayValue {
    /// An un-grouped decimal numeral: optional leading `-`, at most one
    /// decimal point, never empty.
    Numeral(String),
    /// The terminal error state; only Clear dissolves it.
    Error,
}

impl DisplayValue {
    fn numeral(text: impl Into<String>) -> Self {
        Self::Numeral(text.into())
    }

    /// Returns true for the error sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the raw (un-grouped) display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Numeral(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::numeral("0")
    }
}

/// A discrete user event, one keypad press each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcEvent {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// One of the four binary operators
    Operator(Operator),
    /// The equals key
    Equals,
    /// Divide the displayed value by 100, in place
    Percent,
    /// Flip the sign of the displayed value
    Negate,
    /// Drop the last entered character
    Backspace,
    /// Reset to the idle state
    Clear,
}

/// The complete engine state, replaced (never mutated) on every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    display: DisplayValue,
    equation: String,
    previous: Option<f64>,
    operation: Option<Operator>,
    should_reset_display: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::idle()
    }
}

impl EngineState {
    /// The idle state: display `0`, no equation, nothing pending.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            display: DisplayValue::default(),
            equation: String::new(),
            previous: None,
            operation: None,
            should_reset_display: false,
        }
    }

    /// The terminal error state entered on division by zero.
    fn error_state() -> Self {
        Self {
            display: DisplayValue::Error,
            equation: String::new(),
            previous: None,
            operation: None,
            should_reset_display: true,
        }
    }

    /// Returns the displayed value.
    #[must_use]
    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    /// Returns the grouped display text (or the error sentinel).
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.display {
            DisplayValue::Numeral(text) => format::group_thousands(text),
            DisplayValue::Error => ERROR_TEXT.to_string(),
        }
    }

    /// Returns the running-equation preview; empty when idle.
    #[must_use]
    pub fn equation_text(&self) -> &str {
        &self.equation
    }

    /// Returns the captured left operand of the pending operation.
    #[must_use]
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// Returns the pending operator.
    #[must_use]
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// True when the next digit starts a fresh operand.
    #[must_use]
    pub fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// Applies one event, returning the successor state.
    ///
    /// While the error sentinel is shown, every event except Clear is a
    /// no-op.
    #[must_use]
    pub fn apply_event(&self, event: CalcEvent, rounding: Rounding) -> Self {
        if self.display.is_error() && event != CalcEvent::Clear {
            return self.clone();
        }
        match event {
            CalcEvent::Digit(d) => self.press_digit(d),
            CalcEvent::Decimal => self.press_decimal(),
            CalcEvent::Operator(op) => self.press_operator(op),
            CalcEvent::Equals => self.press_equals(rounding),
            CalcEvent::Percent => self.press_percent(),
            CalcEvent::Negate => self.press_negate(),
            CalcEvent::Backspace => self.press_backspace(),
            CalcEvent::Clear => Self::idle(),
        }
    }

    /// Raw numeral text; callers run after the error guard.
    fn numeral_text(&self) -> &str {
        self.display.text()
    }

    /// Parses the displayed operand. Display text is engine-built, so a
    /// parse failure is a defect; fall back to zero rather than panic.
    fn current_value(&self) -> f64 {
        format::parse_numeral(self.numeral_text()).unwrap_or_else(|_| {
            debug_assert!(false, "engine-built display failed to parse");
            0.0
        })
    }

    fn press_digit(&self, d: u8) -> Self {
        let digit = char::from(b'0' + d.min(9));
        let mut next = self.clone();
        if self.should_reset_display {
            next.display = DisplayValue::numeral(digit);
            next.should_reset_display = false;
        } else if self.numeral_text() == "0" {
            next.display = DisplayValue::numeral(digit);
        } else {
            let mut text = self.numeral_text().to_string();
            text.push(digit);
            next.display = DisplayValue::Numeral(text);
        }
        next
    }

    fn press_decimal(&self) -> Self {
        let mut next = self.clone();
        if self.should_reset_display {
            next.display = DisplayValue::numeral("0.");
            next.should_reset_display = false;
        } else if !self.numeral_text().contains('.') {
            let mut text = self.numeral_text().to_string();
            text.push('.');
            next.display = DisplayValue::Numeral(text);
        }
        next
    }

    fn press_backspace(&self) -> Self {
        let text = self.numeral_text();
        let mut next = self.clone();
        // Numerals are ASCII, so byte slicing is safe. A bare "-" left
        // after deletion is not a numeral; snap to the floor.
        next.display = if text.len() > 1 && &text[..text.len() - 1] != "-" {
            DisplayValue::numeral(&text[..text.len() - 1])
        } else {
            DisplayValue::numeral("0")
        };
        next
    }

    fn press_operator(&self, op: Operator) -> Self {
        let current = self.current_value();
        let mut next = self.clone();
        match (self.previous, self.operation) {
            // A fresh operand was typed since the last operator: settle
            // the pending operation first (left-to-right chaining).
            (Some(prev), Some(pending)) if !self.should_reset_display => {
                match Evaluator::apply(prev, current, pending) {
                    Ok(result) => {
                        let text = format::render_number(result);
                        next.equation =
                            format!("{}{}", format::group_thousands(&text), op.symbol());
                        next.display = DisplayValue::Numeral(text);
                        next.previous = Some(result);
                    }
                    Err(_) => return Self::error_state(),
                }
            }
            // First operator, or the operator was retyped without a new
            // operand: (re)capture the left operand.
            _ => {
                next.previous = Some(current);
                next.equation = format!("{}{}", self.display_text(), op.symbol());
            }
        }
        next.operation = Some(op);
        next.should_reset_display = true;
        next
    }

    fn press_equals(&self, rounding: Rounding) -> Self {
        let (Some(prev), Some(op)) = (self.previous, self.operation) else {
            return self.clone();
        };
        let current = self.current_value();
        match Evaluator::apply(prev, current, op) {
            Ok(result) => {
                let result = rounding.apply(result);
                let mut next = Self::idle();
                next.display = DisplayValue::Numeral(format::render_number(result));
                next.equation = format!(
                    "{}{}{}",
                    format::group_thousands(&format::render_number(prev)),
                    op.symbol(),
                    format::group_thousands(&format::render_number(current)),
                );
                next.should_reset_display = true;
                next
            }
            Err(_) => Self::error_state(),
        }
    }

    fn press_percent(&self) -> Self {
        let mut next = self.clone();
        next.display = DisplayValue::Numeral(format::render_number(self.current_value() / 100.0));
        next.should_reset_display = true;
        next
    }

    fn press_negate(&self) -> Self {
        let mut next = self.clone();
        next.display = DisplayValue::Numeral(format::render_number(-self.current_value()));
        next
    }
}

/// Owns the current state, the rounding policy, and the history.
///
/// The engine proper is the pure reducer above; this façade is what the
/// TUI (or any embedding host) drives, one `press_*` call per keypad
/// event.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
    rounding: Rounding,
    history: History,
}

impl Calculator {
    /// Creates a calculator at idle with the canonical rounding policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom rounding policy.
    #[must_use]
    pub fn with_rounding(rounding: Rounding) -> Self {
        Self {
            rounding,
            ..Self::default()
        }
    }

    /// Returns the current engine state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the rounding policy in effect.
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Returns the grouped display text.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.state.display_text()
    }

    /// Returns the running-equation preview.
    #[must_use]
    pub fn equation_text(&self) -> &str {
        self.state.equation_text()
    }

    /// Returns the history of completed computations.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Empties the history; the engine state is untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Feeds one event through the reducer.
    ///
    /// A successful equals press records the completed computation
    /// (expanded equation and result) in the history.
    pub fn press(&mut self, event: CalcEvent) {
        let next = self.state.apply_event(event, self.rounding);
        let completed = event == CalcEvent::Equals
            && self.state.operation.is_some()
            && !self.state.display.is_error()
            && !next.display.is_error();
        if completed {
            self.history.record(&next.equation, &next.display_text());
        }
        self.state = next;
    }

    /// Presses a digit key (0-9).
    pub fn press_digit(&mut self, d: u8) {
        self.press(CalcEvent::Digit(d));
    }

    /// Presses the decimal point key.
    pub fn press_decimal(&mut self) {
        self.press(CalcEvent::Decimal);
    }

    /// Presses an operator key.
    pub fn press_operator(&mut self, op: Operator) {
        self.press(CalcEvent::Operator(op));
    }

    /// Presses the equals key.
    pub fn press_equals(&mut self) {
        self.press(CalcEvent::Equals);
    }

    /// Presses the percent key.
    pub fn press_percent(&mut self) {
        self.press(CalcEvent::Percent);
    }

    /// Presses the sign-flip key.
    pub fn press_negate(&mut self) {
        self.press(CalcEvent::Negate);
    }

    /// Presses the backspace key.
    pub fn press_backspace(&mut self) {
        self.press(CalcEvent::Backspace);
    }

    /// Presses the clear key; history survives.
    pub fn press_clear(&mut self) {
        self.press(CalcEvent::Clear);
    }
}
