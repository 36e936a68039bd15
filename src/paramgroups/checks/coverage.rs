//! Cross-reference of grouped parameters against `--parameters`.
//!
//! Coverage reports expected parameters no group lists; completeness reports
//! grouped parameters nobody expected. Both share the set of grouped
//! parameters through the context.

use std::collections::BTreeSet;

use crate::lint::{Check, CheckId, Issue, Target};
use crate::paramgroups::context::collect_parameters;
use crate::paramgroups::ParamgroupsContext;

/// Every expected parameter must appear in some group.
pub struct CoverageCheck;

impl Check<ParamgroupsContext> for CoverageCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-coverage")
    }

    fn name(&self) -> &str {
        "Parameter Coverage"
    }

    fn description(&self) -> &str {
        "Validates every expected parameter appears in a group"
    }

    fn run(&self, _target: &Target, ctx: &mut ParamgroupsContext) -> anyhow::Result<Vec<Issue>> {
        let Some(expected) = ctx.expected() else {
            return Ok(vec![Issue::info(
                "Parameter coverage testing skipped - no expected parameters provided",
            )
            .with_context("Use --parameters to enable coverage validation")]);
        };
        let Some(data) = &ctx.parsed else {
            return Ok(vec![Issue::error(
                "Cannot validate parameter coverage: JSON parsing failed",
            )
            .with_context("File validation must pass before parameter coverage validation")]);
        };

        let found = collect_parameters(data);
        let expected: BTreeSet<&str> = expected.iter().map(String::as_str).collect();
        let issues = expected
            .into_iter()
            .filter(|param| !found.contains(*param))
            .map(|param| {
                Issue::error(format!(
                    "Expected parameter '{}' not found in any parameter group",
                    param
                ))
            })
            .collect();

        ctx.found_parameters = Some(found);
        Ok(issues)
    }
}

/// No group may list a parameter outside the expected set.
pub struct CompletenessCheck;

impl Check<ParamgroupsContext> for CompletenessCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-completeness")
    }

    fn name(&self) -> &str {
        "Parameter Completeness"
    }

    fn description(&self) -> &str {
        "Validates groups list only expected parameters"
    }

    fn run(&self, _target: &Target, ctx: &mut ParamgroupsContext) -> anyhow::Result<Vec<Issue>> {
        let Some(expected) = ctx.expected() else {
            return Ok(vec![Issue::info(
                "Parameter completeness testing skipped - no expected parameters provided",
            )
            .with_context("Use --parameters to enable completeness validation")]);
        };
        let expected: BTreeSet<String> = expected.iter().cloned().collect();

        if ctx.found_parameters.is_none() {
            let Some(data) = &ctx.parsed else {
                return Ok(vec![Issue::error(
                    "Cannot validate parameter completeness: JSON parsing failed",
                )
                .with_context(
                    "File validation must pass before parameter completeness validation",
                )]);
            };
            ctx.found_parameters = Some(collect_parameters(data));
        }
        let found = ctx.found_parameters.as_ref().map(|f| f.iter()).into_iter().flatten();

        Ok(found
            .filter(|param| !expected.contains(*param))
            .map(|param| {
                Issue::error(format!(
                    "Unexpected parameter '{}' found in paramgroups file",
                    param
                ))
                .with_context("Parameter not in expected parameters list")
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use serde_json::json;

    const DOC: &str = r#"[
        {"name": "Inputs", "parameters": ["input.file", "sample.name"]},
        {"name": "Advanced", "parameters": ["k", "debug mode"]}
    ]"#;

    fn ctx(expected: &[&str]) -> ParamgroupsContext {
        ParamgroupsContext {
            expected_parameters: Some(expected.iter().map(|s| s.to_string()).collect()),
            parsed: Some(serde_json::from_str(DOC).unwrap()),
            ..Default::default()
        }
    }

    fn target() -> Target {
        Target::File("paramgroups.json".into())
    }

    #[test]
    fn coverage_reports_missing_and_records_found() {
        let mut ctx = ctx(&["input.file", "output.prefix"]);
        let issues = CoverageCheck.run(&target(), &mut ctx).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Expected parameter 'output.prefix' not found in any parameter group"
        );
        assert_eq!(ctx.found_parameters.map(|f| f.len()), Some(4));
    }

    #[test]
    fn completeness_reports_extras_sorted() {
        let mut ctx = ctx(&["input.file", "sample.name"]);
        let issues = CompletenessCheck.run(&target(), &mut ctx).unwrap();
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Unexpected parameter 'debug mode' found in paramgroups file",
                "Unexpected parameter 'k' found in paramgroups file",
            ]
        );
    }

    #[test]
    fn completeness_reuses_found_parameters() {
        let mut ctx = ctx(&["a"]);
        ctx.parsed = Some(json!([]));
        ctx.found_parameters = Some(["a".to_string(), "b".to_string()].into());
        let issues = CompletenessCheck.run(&target(), &mut ctx).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Unexpected parameter 'b' found in paramgroups file");
    }

    #[test]
    fn both_skip_without_expectation() {
        let mut ctx = ParamgroupsContext::default();
        let coverage = CoverageCheck.run(&target(), &mut ctx).unwrap();
        let completeness = CompletenessCheck.run(&target(), &mut ctx).unwrap();
        assert_eq!(coverage[0].severity, Severity::Info);
        assert_eq!(completeness[0].severity, Severity::Info);
    }

    #[test]
    fn unparsed_document() {
        let mut ctx = ParamgroupsContext {
            expected_parameters: Some(vec!["a".into()]),
            ..Default::default()
        };
        let issues = CompletenessCheck.run(&target(), &mut ctx).unwrap();
        assert_eq!(
            issues[0].message,
            "Cannot validate parameter completeness: JSON parsing failed"
        );
    }
}
