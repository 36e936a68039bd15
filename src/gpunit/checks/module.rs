//! Compares the tested module against `--module`.

use crate::gpunit::GpunitContext;
use crate::lint::{Check, CheckId, Issue, Target};

const LSID_PREFIX: &str = "urn:lsid:";

/// Checks that the `module` field names the expected module.
///
/// Either side may be a plain name or an LSID. A plain expected name
/// matches an LSID whose final component equals it.
pub struct ModuleCheck;

impl Check<GpunitContext> for ModuleCheck {
    fn id(&self) -> CheckId {
        CheckId::new("module-validation")
    }

    fn name(&self) -> &str {
        "Module Validation"
    }

    fn description(&self) -> &str {
        "Validates the module under test matches --module"
    }

    fn run(&self, _target: &Target, ctx: &mut GpunitContext) -> anyhow::Result<Vec<Issue>> {
        let Some(expected) = ctx.expected_module.as_deref().filter(|m| !m.is_empty()) else {
            return Ok(vec![Issue::info(
                "Module validation skipped - no expected module provided",
            )
            .with_context("Use --module to enable module validation")]);
        };
        let Some(data) = &ctx.parsed else {
            return Ok(vec![Issue::error("Cannot validate module: YAML parsing failed")
                .with_context("File validation must pass before module validation")]);
        };
        // Missing or mistyped fields belong to structure validation.
        let Some(actual) = data.get("module").and_then(|m| m.as_str()) else {
            return Ok(Vec::new());
        };

        Ok(compare(expected, actual).into_iter().collect())
    }
}

fn compare(expected: &str, actual: &str) -> Option<Issue> {
    if expected == actual {
        return None;
    }
    if expected.eq_ignore_ascii_case(actual) {
        return Some(Issue::warning(format!(
            "Module name case mismatch: expected '{}', found '{}'",
            expected, actual
        )));
    }

    let expected_lsid = expected.starts_with(LSID_PREFIX);
    let actual_lsid = actual.starts_with(LSID_PREFIX);
    let issue = match (expected_lsid, actual_lsid) {
        (true, false) => Issue::error(format!(
            "Expected LSID '{}' but found module name '{}'",
            expected, actual
        )),
        (false, true) => {
            let parts: Vec<&str> = actual.split(':').collect();
            if parts.len() < 5 {
                Issue::error(format!(
                    "Expected module name '{}' but found malformed LSID '{}'",
                    expected, actual
                ))
            } else if parts.last() == Some(&expected) {
                Issue::info(format!(
                    "Expected module name '{}' matches LSID identifier in '{}'",
                    expected, actual
                ))
            } else {
                Issue::error(format!(
                    "Expected module name '{}' but found LSID '{}'",
                    expected, actual
                ))
            }
        }
        (true, true) => Issue::error(format!(
            "Module LSID mismatch: expected '{}', found '{}'",
            expected, actual
        )),
        (false, false) => Issue::error(format!(
            "Module name mismatch: expected '{}', found '{}'",
            expected, actual
        )),
    };
    Some(issue)
}
