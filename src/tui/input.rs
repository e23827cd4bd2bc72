//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{CalcEvent, Operator};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the engine
    Engine(CalcEvent),
    /// Switch between dark and light themes
    ToggleTheme,
    /// Reset the engine and drop the history
    ClearAll,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearAll,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::handle_char(c),
            KeyCode::Backspace => KeyAction::Engine(CalcEvent::Backspace),
            KeyCode::Enter => KeyAction::Engine(CalcEvent::Equals),
            KeyCode::Esc => KeyAction::Engine(CalcEvent::Clear),
            _ => KeyAction::None,
        }
    }

    fn handle_char(c: char) -> KeyAction {
        // '-' must reach the operator mapping, so negate lives on 'n'
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Engine(CalcEvent::Digit(d as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return KeyAction::Engine(CalcEvent::Operator(op));
        }
        match c {
            '.' => KeyAction::Engine(CalcEvent::Decimal),
            '=' => KeyAction::Engine(CalcEvent::Equals),
            '%' => KeyAction::Engine(CalcEvent::Percent),
            'n' => KeyAction::Engine(CalcEvent::Negate),
            'c' | 'C' => KeyAction::Engine(CalcEvent::Clear),
            't' | 'T' => KeyAction::ToggleTheme,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit and decimal tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            let expected = KeyAction::Engine(CalcEvent::Digit(i as u8));
            assert_eq!(handler.handle_key(key_event(KeyCode::Char(c))), expected);
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Engine(CalcEvent::Decimal)
        );
    }

    // ===== Operator tests =====

    #[test]
    fn test_handle_ascii_operators() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Engine(CalcEvent::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_unicode_operators() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('×'))),
            KeyAction::Engine(CalcEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('÷'))),
            KeyAction::Engine(CalcEvent::Operator(Operator::Divide))
        );
    }

    // ===== Action key tests =====

    #[test]
    fn test_handle_equals_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Engine(CalcEvent::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Engine(CalcEvent::Equals)
        );
    }

    #[test]
    fn test_handle_percent() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Engine(CalcEvent::Percent)
        );
    }

    #[test]
    fn test_handle_negate() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            KeyAction::Engine(CalcEvent::Negate)
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Engine(CalcEvent::Backspace)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('C')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Engine(CalcEvent::Clear)
            );
        }
    }

    #[test]
    fn test_handle_theme_toggle() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('t'))),
            KeyAction::ToggleTheme
        );
    }

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), KeyAction::Quit);
    }

    // ===== Ctrl key tests =====

    #[test]
    fn test_handle_ctrl_c_and_q() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_l() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::ClearAll
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    // ===== Unknown key tests =====

    #[test]
    fn test_handle_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('z'))),
            KeyAction::None
        );
    }

    // ===== KeyAction tests =====

    #[test]
    fn test_key_action_copy() {
        let action = KeyAction::Engine(CalcEvent::Digit(5));
        let copied: KeyAction = action;
        assert_eq!(action, copied);
    }
}
