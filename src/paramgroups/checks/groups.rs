use std::collections::HashSet;

use crate::lint::{Check, CheckId, Issue, Target};
use crate::paramgroups::context::group_label;
use crate::paramgroups::ParamgroupsContext;

/// Each group lists at least one parameter, none of them twice.
pub struct GroupCheck;

impl Check<ParamgroupsContext> for GroupCheck {
    fn id(&self) -> CheckId {
        CheckId::new("group-validation")
    }

    fn name(&self) -> &str {
        "Group Validation"
    }

    fn description(&self) -> &str {
        "Validates groups are non-empty and free of duplicate parameters"
    }

    fn run(&self, _target: &Target, ctx: &mut ParamgroupsContext) -> anyhow::Result<Vec<Issue>> {
        let Some(data) = &ctx.parsed else {
            return Ok(vec![Issue::error("Cannot validate groups: JSON parsing failed")
                .with_context("File validation must pass before group validation")]);
        };

        let mut issues = Vec::new();
        let groups = data.as_array().map(Vec::as_slice).unwrap_or_default();
        for (index, group) in groups.iter().enumerate() {
            if !group.is_object() {
                continue;
            }
            let Some(parameters) = group.get("parameters").and_then(|p| p.as_array()) else {
                continue;
            };
            let label = group_label(index, group);
            if parameters.is_empty() {
                issues.push(Issue::error("Parameter group has zero parameters").with_context(label));
                continue;
            }

            let mut seen = HashSet::new();
            for param in parameters.iter().filter_map(|p| p.as_str()) {
                if !seen.insert(param) {
                    issues.push(
                        Issue::warning(format!("Duplicate parameter '{}' in group", param))
                            .with_context(label.clone()),
                    );
                }
            }
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paramgroups::checks::run_on;
    use crate::lint::Severity;

    #[test]
    fn zero_parameters_is_error_named_by_group() {
        let issues = run_on(&GroupCheck, r#"[{"name": "Advanced", "parameters": []}]"#);
        assert_eq!(
            issues[0].format(),
            "ERROR: Parameter group has zero parameters (Group 'Advanced')"
        );
    }

    #[test]
    fn unnamed_group_uses_index() {
        let issues = run_on(&GroupCheck, r#"[{"name": "a", "parameters": ["x"]}, {"parameters": []}]"#);
        assert_eq!(issues[0].context.as_deref(), Some("Group 1"));
    }

    #[test]
    fn duplicates_warn() {
        let issues = run_on(
            &GroupCheck,
            r#"[{"name": "a", "parameters": ["x", "y", "x"]}]"#,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].message, "Duplicate parameter 'x' in group");
    }

    #[test]
    fn malformed_groups_left_to_structure() {
        assert!(run_on(&GroupCheck, r#"[1, {"name": "a"}, {"parameters": "x"}]"#).is_empty());
    }
}
