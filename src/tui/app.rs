//! TUI application state.

use crate::core::Calculator;

use super::input::KeyAction;
use super::theme::Theme;

/// Calculator application state: the engine plus TUI-only concerns
/// (theme, quit flag).
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calc: Calculator,
    theme: Theme,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new app at idle with the dark theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app around an existing calculator.
    #[must_use]
    pub fn with_calculator(calc: Calculator) -> Self {
        Self {
            calc,
            ..Self::default()
        }
    }

    /// Returns the underlying calculator.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the underlying calculator mutably.
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calc
    }

    /// Returns the active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches between dark and light.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Returns the grouped display text.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.calc.display_text()
    }

    /// Returns the running-equation preview.
    #[must_use]
    pub fn equation_text(&self) -> &str {
        self.calc.equation_text()
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Resets the engine and empties the history.
    pub fn clear_all(&mut self) {
        self.calc.press_clear();
        self.calc.clear_history();
    }

    /// Applies one key action.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Engine(event) => self.calc.press(event),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::ClearAll => self.clear_all(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}
