//! Top-level document shape.

use serde_yaml::{Mapping, Value};

use crate::gpunit::context::{display_value, type_name};
use crate::gpunit::GpunitContext;
use crate::lint::{Check, CheckId, Issue, Target};

const REQUIRED_FIELDS: [&str; 4] = ["name", "module", "params", "assertions"];

/// Requires `name`, `module`, `params` and `assertions` with the right types.
pub struct StructureCheck;

impl Check<GpunitContext> for StructureCheck {
    fn id(&self) -> CheckId {
        CheckId::new("structure-validation")
    }

    fn name(&self) -> &str {
        "Structure Validation"
    }

    fn description(&self) -> &str {
        "Validates the required GPUnit fields and their types"
    }

    fn run(&self, _target: &Target, ctx: &mut GpunitContext) -> anyhow::Result<Vec<Issue>> {
        let Some(data) = &ctx.parsed else {
            return Ok(vec![Issue::error("Cannot validate structure: YAML parsing failed")
                .with_context("File validation must pass before structure validation")]);
        };
        let Some(root) = data.as_mapping() else {
            return Ok(vec![Issue::error(format!(
                "Root element must be an object/dict, found: {}",
                type_name(data)
            ))]);
        };

        let mut issues = Vec::new();
        for field in REQUIRED_FIELDS {
            match root.get(field) {
                None => issues.push(Issue::error(format!("Missing required field '{}'", field))),
                Some(Value::Null) => issues.push(Issue::error(format!(
                    "Required field '{}' cannot be null",
                    field
                ))),
                Some(_) => {}
            }
        }

        for field in ["name", "module"] {
            if let Some(value) = root.get(field).filter(|v| !v.is_null()) {
                check_string_field(field, value, &mut issues);
            }
        }
        if let Some(params) = root.get("params").filter(|v| !v.is_null()) {
            check_params(params, &mut issues);
        }
        if let Some(assertions) = root.get("assertions").filter(|v| !v.is_null()) {
            match assertions.as_mapping() {
                None => issues.push(Issue::error(format!(
                    "Field 'assertions' must be an object/dict, found: {}",
                    type_name(assertions)
                ))),
                Some(map) if map.is_empty() => issues.push(Issue::warning(
                    "Field 'assertions' is empty - no test assertions defined",
                )),
                Some(_) => {}
            }
        }

        let extra = additional_fields(root);
        if !extra.is_empty() {
            issues.push(
                Issue::info(format!("Additional fields found: {}", extra.join(", ")))
                    .with_context("These may be valid but are not standard GPUnit fields"),
            );
        }
        Ok(issues)
    }
}

fn check_string_field(field: &str, value: &Value, issues: &mut Vec<Issue>) {
    match value.as_str() {
        None => issues.push(Issue::error(format!(
            "Field '{}' must be a string, found: {}",
            field,
            type_name(value)
        ))),
        Some(s) if s.trim().is_empty() => {
            issues.push(Issue::error(format!("Field '{}' cannot be empty", field)))
        }
        Some(_) => {}
    }
}

fn check_params(params: &Value, issues: &mut Vec<Issue>) {
    let Some(map) = params.as_mapping() else {
        issues.push(Issue::error(format!(
            "Field 'params' must be an object/dict, found: {}",
            type_name(params)
        )));
        return;
    };
    for (key, value) in map {
        match key.as_str() {
            None => issues.push(
                Issue::error(format!(
                    "Parameter name must be a string, found: {}",
                    type_name(key)
                ))
                .with_context(format!("Parameter: {}", display_value(key))),
            ),
            Some(name) if name.trim().is_empty() => {
                issues.push(Issue::error("Parameter name cannot be empty"))
            }
            Some(_) => {}
        }
        if value.is_null() {
            issues.push(Issue::warning(format!(
                "Parameter '{}' has null value",
                display_value(key)
            )));
        }
    }
}

fn additional_fields(root: &Mapping) -> Vec<String> {
    let mut extra: Vec<String> = root
        .keys()
        .map(display_value)
        .filter(|k| !REQUIRED_FIELDS.contains(&k.as_str()))
        .collect();
    extra.sort();
    extra
}
