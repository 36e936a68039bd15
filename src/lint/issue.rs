//! Severity-tagged findings produced by checks.

use std::fmt;

/// Severity level for an issue.
///
/// Only [`Severity::Error`] fails a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Confirmation or skipped-by-absence note.
    Info,
    /// Advisory finding that does not fail validation.
    Warning,
    /// Finding that fails validation.
    Error,
}

impl Severity {
    /// Upper-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single finding reported by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Where or why, appended in parentheses.
    pub context: Option<String>,
    /// 1-based source line, for line-oriented formats.
    pub line_no: Option<usize>,
    /// Raw text of the offending line.
    pub line_text: Option<String>,
}

impl Issue {
    /// Create an issue with the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            context: None,
            line_no: None,
            line_text: None,
        }
    }

    /// Create an error issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning issue.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an info issue.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Attach context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach a source line.
    pub fn at_line(mut self, line_no: usize, line_text: impl Into<String>) -> Self {
        self.line_no = Some(line_no);
        self.line_text = Some(line_text.into());
        self
    }

    /// Whether this issue fails validation.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render as `SEVERITY: message (context)`.
    pub fn format(&self) -> String {
        match &self.context {
            Some(context) => format!("{}: {} ({})", self.severity, self.message, context),
            None => format!("{}: {}", self.severity, self.message),
        }
    }

    /// Render as `SEVERITY: Line N: message`, followed by the quoted line.
    pub fn format_with_line(&self) -> String {
        let line = match self.line_no {
            Some(n) => n.to_string(),
            None => "N/A".to_string(),
        };
        let mut out = format!("{}: Line {}: {}", self.severity, line, self.message);
        if let Some(text) = &self.line_text {
            out.push_str("\n   > ");
            out.push_str(text.trim_end());
        }
        out
    }
}
