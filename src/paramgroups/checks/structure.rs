use serde_json::{Map, Value};

use crate::lint::{Check, CheckId, Issue, Target};
use crate::paramgroups::context::type_name;
use crate::paramgroups::ParamgroupsContext;

const REQUIRED_FIELDS: [&str; 2] = ["name", "parameters"];
const KNOWN_FIELDS: [&str; 4] = ["name", "description", "hidden", "parameters"];

/// The root is an array of group objects with typed fields.
pub struct StructureCheck;

impl Check<ParamgroupsContext> for StructureCheck {
    fn id(&self) -> CheckId {
        CheckId::new("structure-validation")
    }

    fn name(&self) -> &str {
        "Structure Validation"
    }

    fn description(&self) -> &str {
        "Validates the group array and the fields of each group"
    }

    fn run(&self, _target: &Target, ctx: &mut ParamgroupsContext) -> anyhow::Result<Vec<Issue>> {
        let Some(data) = &ctx.parsed else {
            return Ok(vec![Issue::error("Cannot validate structure: JSON parsing failed")
                .with_context("File validation must pass before structure validation")]);
        };
        let Some(groups) = data.as_array() else {
            return Ok(vec![Issue::error(format!(
                "Root element must be an array, found: {}",
                type_name(data)
            ))]);
        };
        if groups.is_empty() {
            return Ok(vec![Issue::warning("Paramgroups array is empty")]);
        }

        let mut issues = Vec::new();
        for (index, group) in groups.iter().enumerate() {
            let label = format!("Group {}", index);
            match group.as_object() {
                Some(fields) => check_group(fields, &label, &mut issues),
                None => issues.push(
                    Issue::error(format!(
                        "Group element must be an object, found: {}",
                        type_name(group)
                    ))
                    .with_context(label),
                ),
            }
        }
        Ok(issues)
    }
}

fn check_group(group: &Map<String, Value>, label: &str, issues: &mut Vec<Issue>) {
    let mut error = |message: String| issues.push(Issue::error(message).with_context(label));

    for field in REQUIRED_FIELDS {
        match group.get(field) {
            None => error(format!("Missing required field '{}'", field)),
            Some(Value::Null) => error(format!("Required field '{}' cannot be null", field)),
            Some(_) => {}
        }
    }

    match group.get("name") {
        Some(Value::String(name)) if name.trim().is_empty() => {
            error("Field 'name' cannot be empty".to_string())
        }
        Some(Value::String(_)) | Some(Value::Null) | None => {}
        Some(other) => error(format!(
            "Field 'name' must be a string, found: {}",
            type_name(other)
        )),
    }
    if let Some(description) = group.get("description").filter(|d| !d.is_string()) {
        error(format!(
            "Field 'description' must be a string, found: {}",
            type_name(description)
        ));
    }
    if let Some(hidden) = group.get("hidden").filter(|h| !h.is_boolean()) {
        error(format!(
            "Field 'hidden' must be a boolean, found: {}",
            type_name(hidden)
        ));
    }

    match group.get("parameters") {
        Some(Value::Array(params)) => {
            for (j, param) in params.iter().enumerate() {
                let at = format!("{}, parameter {}", label, j);
                match param {
                    Value::String(s) if s.trim().is_empty() => issues.push(
                        Issue::error(format!("Parameter {} cannot be empty", j)).with_context(at),
                    ),
                    Value::String(_) => {}
                    other => issues.push(
                        Issue::error(format!(
                            "Parameter {} must be a string, found: {}",
                            j,
                            type_name(other)
                        ))
                        .with_context(at),
                    ),
                }
            }
        }
        Some(Value::Null) | None => {}
        Some(other) => issues.push(
            Issue::error(format!(
                "Field 'parameters' must be an array, found: {}",
                type_name(other)
            ))
            .with_context(label),
        ),
    }

    let mut unexpected: Vec<&str> = group
        .keys()
        .map(String::as_str)
        .filter(|k| !KNOWN_FIELDS.contains(k))
        .collect();
    if !unexpected.is_empty() {
        unexpected.sort_unstable();
        issues.push(
            Issue::warning(format!("Unexpected fields found: {}", unexpected.join(", ")))
                .with_context(label),
        );
    }
}
