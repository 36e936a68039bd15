//! Report formatters.
//!
//! This module renders [`PipelineResult`]s either as the line-oriented text
//! report (`PASS:`/`FAIL:` header followed by every issue) or as JSON.

pub mod json;
pub mod text;

use std::io::Write;

use clap::ValueEnum;

use crate::lint::{Issue, PipelineResult};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How individual issues are rendered in the text report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IssueStyle {
    /// `SEVERITY: message (context)`
    #[default]
    Context,
    /// `SEVERITY: Line N: message` with the quoted source line.
    Line,
}

impl IssueStyle {
    pub fn render(&self, issue: &Issue) -> String {
        match self {
            IssueStyle::Context => issue.format(),
            IssueStyle::Line => issue.format_with_line(),
        }
    }
}

/// One validated target and its result.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// Format identifier, e.g. `manifest`.
    pub format: &'a str,
    /// Noun used in the verdict line, e.g. `GPUnit file`.
    pub noun: &'a str,
    /// Target as the user should see it.
    pub target: String,
    pub style: IssueStyle,
    pub result: &'a PipelineResult,
}

/// Trait for rendering reports.
pub trait ReportFormatter {
    /// Write a single report.
    fn write_report<W: Write>(&self, report: &Report<'_>, writer: &mut W) -> std::io::Result<()>;

    /// Write several reports of one batch followed by a summary.
    fn write_batch<W: Write>(&self, reports: &[Report<'_>], writer: &mut W) -> std::io::Result<()>;
}

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// `"s"` unless `count` is exactly one.
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
