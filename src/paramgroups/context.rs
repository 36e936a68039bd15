//! Shared state for paramgroups checks.

use std::collections::BTreeSet;

use serde_json::Value;

/// Context threaded through the paramgroups checks of one file.
#[derive(Debug, Clone, Default)]
pub struct ParamgroupsContext {
    /// Parameters every group combined should list (`--parameters`).
    pub expected_parameters: Option<Vec<String>>,
    /// Parsed document, set by file validation.
    pub parsed: Option<Value>,
    /// String parameters listed across all groups, computed once.
    pub found_parameters: Option<BTreeSet<String>>,
}

impl ParamgroupsContext {
    /// Expected parameters, treating an empty list as absent.
    pub fn expected(&self) -> Option<&[String]> {
        self.expected_parameters
            .as_deref()
            .filter(|p| !p.is_empty())
    }
}

/// Every string listed under a group's `parameters` array.
pub fn collect_parameters(data: &Value) -> BTreeSet<String> {
    data.as_array()
        .into_iter()
        .flatten()
        .filter_map(|group| group.get("parameters")?.as_array())
        .flatten()
        .filter_map(|param| param.as_str().map(String::from))
        .collect()
}

/// JSON type name for messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Context label for the group at `index`, preferring its name.
pub fn group_label(index: usize, group: &Value) -> String {
    match group.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => format!("Group '{}'", name),
        _ => format!("Group {}", index),
    }
}
