//! Terminal color helpers for the text formatter.

use console::Style;

/// Colors used when rendering severity and sub-command tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Errors and unrecognized levels
    Red,
    /// Info
    Green,
    /// Warnings
    Yellow,
    /// Sub-command tags
    Blue,
    /// Debug
    Cyan,
}

impl Color {
    fn style(self) -> Style {
        // Escapes are emitted whether or not the sink is a terminal.
        let style = Style::new().force_styling(true);
        match self {
            Color::Red => style.red(),
            Color::Green => style.green(),
            Color::Yellow => style.yellow(),
            Color::Blue => style.blue(),
            Color::Cyan => style.cyan(),
        }
    }
}

/// Wrap `text` in the ANSI escape codes for `color`.
pub fn paint(text: &str, color: Color) -> String {
    color.style().apply_to(text).to_string()
}
