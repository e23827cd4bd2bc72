//! Light and dark color themes, toggled at runtime.

use ratatui::style::Color;

/// The two available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark background, light text (default).
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the color palette for this theme.
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                text: Color::White,
                muted: Color::Gray,
                border: Color::DarkGray,
                accent: Color::Cyan,
                operator: Color::Yellow,
                equals: Color::Green,
                error: Color::Red,
                pressed_fg: Color::Black,
                pressed_bg: Color::Yellow,
            },
            Self::Light => Palette {
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Gray,
                accent: Color::Blue,
                operator: Color::Magenta,
                equals: Color::Green,
                error: Color::Red,
                pressed_fg: Color::White,
                pressed_bg: Color::Blue,
            },
        }
    }
}

/// Concrete colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary text color.
    pub text: Color,
    /// Secondary text (equation preview, help descriptions).
    pub muted: Color,
    /// Pane borders.
    pub border: Color,
    /// Titles and highlights.
    pub accent: Color,
    /// Operator keys.
    pub operator: Color,
    /// The equals key.
    pub equals: Color,
    /// The error sentinel and the clear key.
    pub error: Color,
    /// Foreground of a pressed keypad button.
    pub pressed_fg: Color,
    /// Background of a pressed keypad button.
    pub pressed_bg: Color,
}
