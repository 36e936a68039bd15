//! Checks parameter values against `--types`.

use crate::gpunit::context::{display_value, type_name};
use crate::gpunit::GpunitContext;
use crate::lint::{Check, CheckId, Issue, Target};

/// Each typed parameter must hold a value of its declared kind.
pub struct ParameterTypeCheck;

impl Check<GpunitContext> for ParameterTypeCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-type-validation")
    }

    fn name(&self) -> &str {
        "Parameter Type Validation"
    }

    fn description(&self) -> &str {
        "Validates parameter values match the types given with --types"
    }

    fn run(&self, _target: &Target, ctx: &mut GpunitContext) -> anyhow::Result<Vec<Issue>> {
        let Some(types) = ctx.expected_param_types.as_ref().filter(|t| !t.is_empty()) else {
            return Ok(vec![Issue::info(
                "Parameter type validation skipped - no expected parameter types provided",
            )
            .with_context("Use --parameters with --types to enable type validation")]);
        };
        if ctx.parsed.is_none() {
            return Ok(vec![Issue::error(
                "Cannot validate parameter types: YAML parsing failed",
            )
            .with_context("File validation must pass before type validation")]);
        }
        let Some(params) = ctx.params() else {
            return Ok(Vec::new());
        };

        let mut issues = Vec::new();
        for (key, value) in params {
            let name = display_value(key);
            let Some(expected) = types.get(&name) else {
                continue;
            };
            if value.is_null() {
                issues.push(
                    Issue::warning(format!("Parameter '{}' has no value", name))
                        .with_context(format!("Expected type: {}", expected)),
                );
            } else if !expected.accepts(value) {
                issues.push(
                    Issue::error(format!("Invalid type for parameter '{}'", name)).with_context(
                        format!(
                            "Expected {} but got {} (Value: {})",
                            expected,
                            type_name(value),
                            display_value(value)
                        ),
                    ),
                );
            }
        }
        Ok(issues)
    }
}
