use std::collections::BTreeSet;

use serde_json::Value;

use crate::lint::lazy_regex;
use crate::lint::{Check, CheckId, Issue, Target};
use crate::paramgroups::context::type_name;
use crate::paramgroups::ParamgroupsContext;

lazy_regex!(STANDARD_NAME, r"^[A-Za-z0-9.]+$");

/// Parameter names use letters, digits and periods only.
pub struct ParameterNamesCheck;

impl Check<ParamgroupsContext> for ParameterNamesCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-names")
    }

    fn name(&self) -> &str {
        "Parameter Names"
    }

    fn description(&self) -> &str {
        "Validates parameter names contain no spaces or unusual characters"
    }

    fn run(&self, _target: &Target, ctx: &mut ParamgroupsContext) -> anyhow::Result<Vec<Issue>> {
        let Some(data) = &ctx.parsed else {
            return Ok(vec![Issue::error("Cannot validate parameter names: JSON parsing failed")
                .with_context("File validation must pass before parameter name validation")]);
        };
        let Some(groups) = data.as_array() else {
            return Ok(vec![Issue::warning(format!(
                "Skipping parameter name checks: root element is {}, expected array",
                type_name(data)
            ))]);
        };

        let mut issues = Vec::new();
        let mut names = BTreeSet::new();
        for (index, group) in groups.iter().enumerate() {
            if !group.is_object() {
                continue;
            }
            match group.get("parameters") {
                None => issues.push(Issue::warning(format!(
                    "Skipping parameter name validation for Group {}: Missing required field 'parameters'",
                    index
                ))),
                Some(params) if is_blank(params) => issues.push(Issue::warning(format!(
                    "Skipping parameter name validation for Group {}: Field 'parameters' is empty",
                    index
                ))),
                Some(Value::Array(params)) => {
                    names.extend(params.iter().filter_map(Value::as_str));
                }
                Some(_) => {}
            }
        }

        for name in names {
            if name.contains(' ') {
                issues.push(
                    Issue::error(format!("Parameter name '{}' contains spaces", name))
                        .with_context("Spaces are not allowed in parameter names"),
                );
            } else if !STANDARD_NAME.is_match(name) {
                issues.push(
                    Issue::warning(format!(
                        "Parameter name '{}' contains non-standard characters",
                        name
                    ))
                    .with_context("Only alphanumeric characters and periods are recommended"),
                );
            }
        }

        if issues.is_empty() {
            issues.push(Issue::info("All parameter names follow the expected format"));
        }
        Ok(issues)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use crate::paramgroups::checks::run_on;

    #[test]
    fn clean_names_get_info() {
        let issues = run_on(
            &ParameterNamesCheck,
            r#"[{"name": "a", "parameters": ["input.file", "k2"]}]"#,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn spaces_are_errors_other_characters_warn() {
        let issues = run_on(
            &ParameterNamesCheck,
            r#"[{"name": "a", "parameters": ["debug mode", "out_dir", "ok"]}]"#,
        );
        let rendered: Vec<_> = issues.iter().map(|i| (i.severity, i.message.as_str())).collect();
        assert_eq!(
            rendered,
            vec![
                (Severity::Error, "Parameter name 'debug mode' contains spaces"),
                (Severity::Warning, "Parameter name 'out_dir' contains non-standard characters"),
            ]
        );
    }

    #[test]
    fn groups_without_parameters_are_noted() {
        let issues = run_on(&ParameterNamesCheck, r#"[{"name": "a"}, {"name": "b", "parameters": []}]"#);
        assert_eq!(
            issues[0].message,
            "Skipping parameter name validation for Group 0: Missing required field 'parameters'"
        );
        assert_eq!(
            issues[1].message,
            "Skipping parameter name validation for Group 1: Field 'parameters' is empty"
        );
    }

    #[test]
    fn object_root_is_skipped_with_warning() {
        let issues = run_on(&ParameterNamesCheck, r#"{"parameters": []}"#);
        assert_eq!(
            issues[0].message,
            "Skipping parameter name checks: root element is object, expected array"
        );
    }
}
