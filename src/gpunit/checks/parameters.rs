//! Compares the test's parameter names against `--parameters`.

use std::collections::BTreeSet;

use crate::gpunit::context::display_value;
use crate::gpunit::GpunitContext;
use crate::lint::{Check, CheckId, Issue, Target};

/// Flags parameters the module does not declare and notes ones the test omits.
pub struct ParameterCheck;

impl Check<GpunitContext> for ParameterCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-validation")
    }

    fn name(&self) -> &str {
        "Parameter Validation"
    }

    fn description(&self) -> &str {
        "Validates test parameters against --parameters"
    }

    fn run(&self, _target: &Target, ctx: &mut GpunitContext) -> anyhow::Result<Vec<Issue>> {
        let Some(expected) = ctx.expected_parameters.as_ref().filter(|p| !p.is_empty()) else {
            return Ok(vec![Issue::info(
                "Parameter validation skipped - no expected parameters provided",
            )
            .with_context("Use --parameters to enable parameter validation")]);
        };
        if ctx.parsed.is_none() {
            return Ok(vec![Issue::error("Cannot validate parameters: YAML parsing failed")
                .with_context("File validation must pass before parameter validation")]);
        }
        let Some(params) = ctx.params() else {
            return Ok(Vec::new());
        };

        let actual: BTreeSet<String> = params.keys().map(display_value).collect();
        let expected_set: BTreeSet<String> = expected.iter().cloned().collect();

        let mut issues = Vec::new();
        let unexpected: Vec<_> = actual.difference(&expected_set).collect();
        for param in &unexpected {
            issues.push(
                Issue::error(format!("Unexpected parameter '{}' found in GPUnit file", param))
                    .with_context("Parameter not in expected parameters list"),
            );
        }
        let missing: Vec<_> = expected_set.difference(&actual).collect();
        for param in &missing {
            issues.push(
                Issue::warning(format!(
                    "Expected parameter '{}' not found in GPUnit file",
                    param
                ))
                .with_context("Parameter was expected but not provided in this test"),
            );
        }
        if unexpected.is_empty() && missing.is_empty() {
            issues.push(Issue::info(format!(
                "All {} expected parameters found and validated",
                expected.len()
            )));
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    fn check(expected: &[&str], yaml: &str) -> Vec<Issue> {
        let mut ctx = GpunitContext {
            expected_parameters: Some(expected.iter().map(|s| s.to_string()).collect()),
            parsed: Some(serde_yaml::from_str(yaml).unwrap()),
            ..Default::default()
        };
        ParameterCheck
            .run(&Target::File("t.yml".into()), &mut ctx)
            .unwrap()
    }

    #[test]
    fn skipped_without_expectation() {
        let issues = ParameterCheck
            .run(&Target::File("t.yml".into()), &mut GpunitContext::default())
            .unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn all_found() {
        let issues = check(&["a", "b"], "params: {b: 1, a: 2}\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "All 2 expected parameters found and validated");
    }

    #[test]
    fn unexpected_is_error_missing_is_warning() {
        let issues = check(&["a", "c"], "params: {z: 1, a: 2, b: 3}\n");
        let rendered: Vec<_> = issues.iter().map(|i| (i.severity, i.message.as_str())).collect();
        assert_eq!(
            rendered,
            vec![
                (Severity::Error, "Unexpected parameter 'b' found in GPUnit file"),
                (Severity::Error, "Unexpected parameter 'z' found in GPUnit file"),
                (Severity::Warning, "Expected parameter 'c' not found in GPUnit file"),
            ]
        );
    }

    #[test]
    fn non_mapping_params_left_to_structure() {
        assert!(check(&["a"], "params: [a]\n").is_empty());
    }
}
