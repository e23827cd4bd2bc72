//! Terminal front end for the calculator engine.

mod app;
mod input;
mod keypad;
mod theme;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use theme::{Palette, Theme};
pub use ui::render;
