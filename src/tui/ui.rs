//! TUI rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};
use super::theme::Palette;

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
    palette: Palette,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
            palette: app.theme().palette(),
        }
    }

    /// Creates the main horizontal layout (main + keypad + help sidebar).
    fn create_horizontal_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(35),    // Main calculator area
                Constraint::Length(22), // Keypad
                Constraint::Length(22), // Help sidebar
            ])
            .split(area)
            .to_vec()
    }

    /// Creates the main vertical layout chunks.
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Equation preview
                Constraint::Length(3), // Display
                Constraint::Min(5),    // History
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the running-equation pane, right-aligned like the
    /// secondary line of a handheld calculator.
    fn render_equation(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Span::styled(
            self.app.equation_text(),
            Style::default().fg(self.palette.muted),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Equation ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.palette.border)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the main display pane.
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display_text();
        let style = if self.app.calculator().state().display().is_error() {
            Style::default()
                .fg(self.palette.error)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.accent)),
            );
        paragraph.render(area, buf);
    }

    /// Renders the history pane, newest first.
    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .calculator()
            .history()
            .iter_rev()
            .take(10)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.equation.as_str(),
                        Style::default().fg(self.palette.muted),
                    ),
                    Span::raw(" = "),
                    Span::styled(
                        entry.result.as_str(),
                        Style::default().fg(self.palette.accent),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" History (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.palette.border)),
        );
        list.render(area, buf);
    }

    /// Renders the keypad area.
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(&self.keypad, self.palette).render(area, buf);
    }

    /// Renders the help sidebar.
    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Shortcuts
                Constraint::Length(3), // Operators
            ])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{key:>7}"),
                        Style::default().fg(self.palette.operator),
                    ),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(self.palette.muted)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(self.palette.accent),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(self.palette.border)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.text))
            .render(area, buf);

        let h_chunks = self.create_horizontal_layout(area);

        if h_chunks.len() >= 3 {
            let main_area = h_chunks[0];
            let keypad_area = h_chunks[1];
            let help_area = h_chunks[2];

            let chunks = self.create_layout(main_area);

            if chunks.len() >= 3 {
                self.render_equation(chunks[0], buf);
                self.render_display(chunks[1], buf);
                self.render_history(chunks[2], buf);
            }

            self.render_keypad(keypad_area, buf);
            self.render_help_sidebar(help_area, buf);
        }
    }
}

/// Main window title.
pub const APP_TITLE: &str = " Chaincalc ";

/// Help text for the calculator (compact, for sidebar).
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Type"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("%", "Percent"),
    ("n", "Negate"),
    ("Bksp", "Delete"),
    ("Esc", "Clear"),
    ("t", "Theme"),
    ("Ctrl+L", "Clear all"),
    ("Ctrl+C", "Quit"),
];

/// Operators help.
pub const HELP_OPERATORS: &str = "Ops: + − × ÷  chained L→R";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::tui::KeyAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        Terminal::new(backend).unwrap()
    }

    fn buf_to_string(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_create_layout() {
        let app = CalculatorApp::new();
        let ui = CalculatorUi::new(&app);
        let chunks = ui.create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_create_horizontal_layout() {
        let app = CalculatorApp::new();
        let ui = CalculatorUi::new(&app);
        let chunks = ui.create_horizontal_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].width, 22);
        assert_eq!(chunks[2].width, 22);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_idle() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("Display"));
        assert!(content.contains("Equation"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_with_pending_equation() {
        let mut app = CalculatorApp::new();
        app.calculator_mut().press_digit(1);
        app.calculator_mut().press_digit(2);
        app.calculator_mut().press_operator(Operator::Add);
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("12+"));
    }

    #[test]
    fn test_render_with_result() {
        let mut app = CalculatorApp::new();
        app.calculator_mut().press_digit(2);
        app.calculator_mut().press_operator(Operator::Add);
        app.calculator_mut().press_digit(3);
        app.calculator_mut().press_equals();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("2+3"));
        assert!(content.contains('5'));
    }

    #[test]
    fn test_render_with_error() {
        let mut app = CalculatorApp::new();
        app.calculator_mut().press_digit(1);
        app.calculator_mut().press_operator(Operator::Divide);
        app.calculator_mut().press_digit(0);
        app.calculator_mut().press_equals();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("Error"));
    }

    #[test]
    fn test_render_with_grouped_display() {
        let mut app = CalculatorApp::new();
        for d in [1, 2, 3, 4, 5, 6, 7] {
            app.calculator_mut().press_digit(d);
        }
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("1,234,567"));
    }

    #[test]
    fn test_render_history_entries() {
        let mut app = CalculatorApp::new();
        app.calculator_mut().press_digit(1);
        app.calculator_mut().press_operator(Operator::Add);
        app.calculator_mut().press_digit(1);
        app.calculator_mut().press_equals();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("1+1"));
    }

    #[test]
    fn test_render_many_history_entries_caps_at_ten() {
        let mut app = CalculatorApp::new();
        for d in 1..=9 {
            app.calculator_mut().press_digit(d);
            app.calculator_mut().press_operator(Operator::Add);
            app.calculator_mut().press_digit(d);
            app.calculator_mut().press_equals();
            app.calculator_mut().press_clear();
        }
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("9+9")); // Most recent
    }

    #[test]
    fn test_render_small_terminal() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(20, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_render_light_theme() {
        let mut app = CalculatorApp::new();
        app.apply(KeyAction::ToggleTheme);
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("Display"));
    }

    #[test]
    fn test_full_layout_three_columns() {
        let app = CalculatorApp::new();
        let ui = CalculatorUi::new(&app);
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);

        ui.render(area, &mut buf);

        let content = buf_to_string(&buf);
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
    }

    #[test]
    fn test_render_sections_individually() {
        let app = CalculatorApp::new();
        let ui = CalculatorUi::new(&app);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));

        ui.render_equation(Rect::new(0, 0, 40, 3), &mut buf);
        ui.render_display(Rect::new(0, 3, 40, 3), &mut buf);
        ui.render_history(Rect::new(0, 6, 40, 10), &mut buf);
        ui.render_keypad(Rect::new(40, 0, 22, 12), &mut buf);
        ui.render_help_sidebar(Rect::new(62, 0, 18, 20), &mut buf);

        let content = buf_to_string(&buf);
        assert!(content.contains("Equation"));
        assert!(content.contains("Display"));
        assert!(content.contains("History"));
        assert!(content.contains("Help"));
    }

    // ===== Help panel tests =====

    #[test]
    fn test_help_shortcuts_contains_essential_keys() {
        let keys: Vec<&str> = HELP_SHORTCUTS.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"Enter"));
        assert!(keys.contains(&"Esc"));
        assert!(keys.contains(&"Ctrl+C"));
    }

    #[test]
    fn test_help_shortcuts_has_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
    }

    #[test]
    fn test_help_operators_shows_glyphs() {
        assert!(HELP_OPERATORS.contains('+'));
        assert!(HELP_OPERATORS.contains('−'));
        assert!(HELP_OPERATORS.contains('×'));
        assert!(HELP_OPERATORS.contains('÷'));
    }
}
