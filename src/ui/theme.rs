//! Visual theme and styling.

use console::Style;

/// Colours for report output.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for up-to-date installations (green).
    pub ok: Style,
    /// Style for outdated installations (orange).
    pub nok: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            nok: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            nok: Style::new(),
            error: Style::new(),
        }
    }

    /// Format an OK line.
    pub fn format_ok(&self, msg: &str) -> String {
        self.ok.apply_to(msg).to_string()
    }

    /// Format a NOK line.
    pub fn format_nok(&self, msg: &str) -> String {
        self.nok.apply_to(msg).to_string()
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = CheckTheme::plain();
        assert_eq!(theme.format_ok("OK : /a (1)"), "OK : /a (1)");
        assert_eq!(theme.format_nok("NOK : /b (0)"), "NOK : /b (0)");
        assert_eq!(theme.format_error("Error: x"), "Error: x");
    }

    #[test]
    fn styled_theme_keeps_text() {
        let theme = CheckTheme::new();
        assert!(theme.format_ok("OK : /a (1)").contains("OK : /a (1)"));
        assert!(theme.format_nok("NOK : /b (0)").contains("NOK : /b (0)"));
    }
}
