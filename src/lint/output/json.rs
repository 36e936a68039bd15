//! JSON output formatter.
//!
//! Formats reports as machine-readable JSON for tooling integration.

use serde::Serialize;
use std::io::Write;

use super::{Report, ReportFormatter};

/// Formats reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport {
    format: String,
    target: String,
    passed: bool,
    summary: JsonSummary,
    issues: Vec<JsonIssue>,
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    info: usize,
}

#[derive(Serialize)]
struct JsonIssue {
    check: String,
    severity: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_text: Option<String>,
}

#[derive(Serialize)]
struct JsonBatch {
    files: Vec<JsonReport>,
    summary: JsonBatchSummary,
}

#[derive(Serialize)]
struct JsonBatchSummary {
    passed: usize,
    total: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn convert(report: &Report<'_>) -> JsonReport {
        let result = report.result;
        JsonReport {
            format: report.format.to_string(),
            target: report.target.clone(),
            passed: result.passed,
            summary: JsonSummary {
                errors: result.error_count(),
                warnings: result.warning_count(),
                info: result.info_count(),
            },
            issues: result
                .findings
                .iter()
                .map(|f| JsonIssue {
                    check: f.check.to_string(),
                    severity: f.issue.severity.label(),
                    message: f.issue.message.clone(),
                    context: f.issue.context.clone(),
                    line: f.issue.line_no,
                    line_text: f.issue.line_text.clone(),
                })
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn write_report<W: Write>(&self, report: &Report<'_>, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &Self::convert(report))?;
        writeln!(writer)
    }

    fn write_batch<W: Write>(&self, reports: &[Report<'_>], writer: &mut W) -> std::io::Result<()> {
        if let [single] = reports {
            return self.write_report(single, writer);
        }
        let batch = JsonBatch {
            summary: JsonBatchSummary {
                passed: reports.iter().filter(|r| r.result.passed).count(),
                total: reports.len(),
            },
            files: reports.iter().map(Self::convert).collect(),
        };
        serde_json::to_writer_pretty(&mut *writer, &batch)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::output::IssueStyle;
    use crate::lint::{CheckId, Finding, Issue, PipelineResult};

    fn sample() -> PipelineResult {
        PipelineResult {
            passed: false,
            findings: vec![Finding {
                check: CheckId::new("duplicate-keys"),
                issue: Issue::error("Duplicate key 'name' (previously defined at line 2)")
                    .at_line(3, "name=Bar"),
            }],
        }
    }

    #[test]
    fn formats_report_as_json() {
        let result = sample();
        let report = Report {
            format: "manifest",
            noun: "Manifest",
            target: "manifest".into(),
            style: IssueStyle::Line,
            result: &result,
        };

        let mut out = Vec::new();
        JsonFormatter::new().write_report(&report, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["format"], "manifest");
        assert_eq!(value["passed"], false);
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["issues"][0]["check"], "duplicate-keys");
        assert_eq!(value["issues"][0]["severity"], "ERROR");
        assert_eq!(value["issues"][0]["line"], 3);
        assert!(value["issues"][0].get("context").is_none());
    }

    #[test]
    fn batch_wraps_files() {
        let failed = sample();
        let passed = PipelineResult {
            passed: true,
            findings: vec![],
        };
        let reports: Vec<Report<'_>> = [&passed, &failed]
            .into_iter()
            .map(|r| Report {
                format: "gpunit",
                noun: "GPUnit file",
                target: "t.yml".into(),
                style: IssueStyle::Context,
                result: r,
            })
            .collect();

        let mut out = Vec::new();
        JsonFormatter::new().write_batch(&reports, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["summary"]["passed"], 1);
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["files"].as_array().map(|f| f.len()), Some(2));
    }
}
