//! Visual theme and styling.

use console::Style;

/// Styles for the report verdict and progress lines.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passing verdicts (green bold).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failing verdicts (red bold).
    pub error: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().bold(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Style the `PASS` verdict.
    pub fn pass(&self, verdict: &str) -> String {
        self.success.apply_to(verdict).to_string()
    }

    /// Style the `FAIL` verdict.
    pub fn fail(&self, verdict: &str) -> String {
        self.error.apply_to(verdict).to_string()
    }

    /// Format a finished check line (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a check that only produced warnings.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a failed check line (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
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
    fn plain_theme_leaves_verdicts_untouched() {
        let theme = Theme::plain();
        assert_eq!(theme.pass("PASS"), "PASS");
        assert_eq!(theme.fail("FAIL"), "FAIL");
    }

    #[test]
    fn theme_formats_success() {
        let msg = Theme::plain().format_success("file-name");
        assert!(msg.contains("✓"));
        assert!(msg.contains("file-name"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = Theme::plain().format_warning("docker-image");
        assert!(msg.contains("⚠"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = Theme::plain().format_error("required-keys");
        assert!(msg.contains("✗"));
        assert!(msg.contains("required-keys"));
    }
}
