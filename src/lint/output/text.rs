//! Text report formatter.
//!
//! Produces the stdout contract: a `PASS:` line, or a `FAIL:` header followed
//! by one line per issue.

use std::io::Write;

use super::{plural, Report, ReportFormatter};
use crate::ui::theme::Theme;

/// Formats reports for terminal display with optional color support.
pub struct TextFormatter {
    theme: Theme,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme }
    }
}

impl ReportFormatter for TextFormatter {
    fn write_report<W: Write>(&self, report: &Report<'_>, writer: &mut W) -> std::io::Result<()> {
        let result = report.result;
        if result.passed {
            return writeln!(
                writer,
                "{}: {} '{}' passed all validation checks.",
                self.theme.pass("PASS"),
                report.noun,
                report.target
            );
        }

        let errors = result.error_count();
        let warnings = result.warning_count();
        let mut header = format!(
            "{}: {} '{}' failed {} check{}",
            self.theme.fail("FAIL"),
            report.noun,
            report.target,
            errors,
            plural(errors)
        );
        if warnings > 0 {
            header.push_str(&format!(" and has {} warning{}", warnings, plural(warnings)));
        }
        writeln!(writer, "{}:", header)?;

        for issue in result.issues() {
            writeln!(writer, "{}", report.style.render(issue))?;
        }
        Ok(())
    }

    fn write_batch<W: Write>(&self, reports: &[Report<'_>], writer: &mut W) -> std::io::Result<()> {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            self.write_report(report, writer)?;
        }

        if reports.len() > 1 {
            let total = reports.len();
            let passed = reports.iter().filter(|r| r.result.passed).count();
            let noun = reports.first().map(|r| r.noun).unwrap_or("file");
            writeln!(writer)?;
            writeln!(writer, "SUMMARY: {}/{} {}s passed", passed, total, noun)?;
            if passed < total {
                writeln!(writer, "         {} file(s) failed validation", total - passed)?;
            }
        }
        Ok(())
    }
}
