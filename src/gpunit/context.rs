//! Shared state for GPUnit checks.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde_yaml::{Mapping, Value};

/// Expected kind of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParamType {
    Text,
    Number,
    File,
}

impl ParamType {
    /// Whether a YAML value is acceptable for this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ParamType::Number => value.is_number(),
            ParamType::Text | ParamType::File => value.is_string(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamType::Text => "text",
            ParamType::Number => "number",
            ParamType::File => "file",
        })
    }
}

/// Context threaded through the GPUnit checks of one file.
#[derive(Debug, Clone, Default)]
pub struct GpunitContext {
    /// Module name or LSID the test should target (`--module`).
    pub expected_module: Option<String>,
    /// Parameters the test should set (`--parameters`).
    pub expected_parameters: Option<Vec<String>>,
    /// Expected type per parameter (`--parameters` zipped with `--types`).
    pub expected_param_types: Option<BTreeMap<String, ParamType>>,
    /// Parsed document, set by file validation when it is non-null YAML.
    pub parsed: Option<Value>,
    /// Raw file text, set by file validation.
    pub content: Option<String>,
}

impl GpunitContext {
    /// The `params` mapping of the parsed document, if it is one.
    pub fn params(&self) -> Option<&Mapping> {
        self.parsed.as_ref()?.get("params")?.as_mapping()
    }
}

/// Neutral name of a YAML value's type for messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a scalar (or anything else) compactly for messages.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
