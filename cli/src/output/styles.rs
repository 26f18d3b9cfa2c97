//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Waiting notices (dimmed yellow)
    pub pending: Style,
    /// Ready notice (green)
    pub success: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.pending = Style::new().yellow().dimmed();
        self.success = Style::new().green().bold();
    }
}
