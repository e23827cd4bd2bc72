//! Visual keypad for the TUI, mirroring a handheld calculator layout.
//!
//! Buttons can be clicked (mouse hit testing) or highlighted when the
//! matching key is pressed on the keyboard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{CalcEvent, Operator};

use super::theme::Palette;

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph shown on the button.
    pub label: char,
    /// Whether the button is currently pressed/highlighted.
    pub pressed: bool,
    /// The action this button performs.
    pub action: ButtonAction,
}

/// Actions that keypad buttons can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type the decimal point
    Decimal,
    /// Press an operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Divide the display by 100
    Percent,
    /// Flip the sign
    Negate,
    /// Drop the last character
    Backspace,
    /// Reset to idle
    Clear,
}

impl ButtonAction {
    /// Returns the engine event this action maps to.
    #[must_use]
    pub fn event(self) -> CalcEvent {
        match self {
            Self::Digit(d) => CalcEvent::Digit(d),
            Self::Decimal => CalcEvent::Decimal,
            Self::Operator(op) => CalcEvent::Operator(op),
            Self::Equals => CalcEvent::Equals,
            Self::Percent => CalcEvent::Percent,
            Self::Negate => CalcEvent::Negate,
            Self::Backspace => CalcEvent::Backspace,
            Self::Clear => CalcEvent::Clear,
        }
    }
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('?'),
            pressed: false,
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates an operator button with the display glyph.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.glyph(),
            pressed: false,
            action: ButtonAction::Operator(op),
        }
    }

    /// Creates the decimal point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            action: ButtonAction::Decimal,
        }
    }

    /// Creates the equals button.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            action: ButtonAction::Equals,
        }
    }

    /// Creates the percent button.
    #[must_use]
    pub fn percent() -> Self {
        Self {
            label: '%',
            pressed: false,
            action: ButtonAction::Percent,
        }
    }

    /// Creates the sign-flip button.
    #[must_use]
    pub fn negate() -> Self {
        Self {
            label: '±',
            pressed: false,
            action: ButtonAction::Negate,
        }
    }

    /// Creates the backspace button.
    #[must_use]
    pub fn backspace() -> Self {
        Self {
            label: '⌫',
            pressed: false,
            action: ButtonAction::Backspace,
        }
    }

    /// Creates the clear button.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            action: ButtonAction::Clear,
        }
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ . ] [ 0 ] [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ± % ÷
            KeypadButton::clear(),
            KeypadButton::negate(),
            KeypadButton::percent(),
            KeypadButton::operator(Operator::Divide),
            // Row 2: 7 8 9 ×
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 4 5 6 −
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            // Row 5: . 0 ⌫ =
            KeypadButton::decimal(),
            KeypadButton::digit(0),
            KeypadButton::backspace(),
            KeypadButton::equals(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a mutable button by index.
    pub fn get_button_mut(&mut self, index: usize) -> Option<&mut KeypadButton> {
        self.buttons.get_mut(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its label glyph.
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button for an engine event.
    #[must_use]
    pub fn find_button_by_event(&self, event: CalcEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.action.event() == event)
    }

    /// Sets a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button matching an engine event, releasing the rest.
    pub fn highlight_event(&mut self, event: CalcEvent) {
        self.release_all();
        if let Some(idx) = self.find_button_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget with the given palette.
    #[must_use]
    pub fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(self.palette.pressed_fg)
                    .bg(self.palette.pressed_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) | ButtonAction::Decimal => {
                        Style::default().fg(self.palette.text)
                    }
                    ButtonAction::Operator(_) | ButtonAction::Percent | ButtonAction::Negate => {
                        Style::default().fg(self.palette.operator)
                    }
                    ButtonAction::Equals => Style::default().fg(self.palette.equals),
                    ButtonAction::Clear => Style::default().fg(self.palette.error),
                    ButtonAction::Backspace => Style::default().fg(self.palette.muted),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                // Glyph labels are one display column wide
                let label_x = x + btn_width.saturating_sub(3) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
