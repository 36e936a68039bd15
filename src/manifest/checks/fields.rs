//! Advisory checks on individual optional fields.
//!
//! These are small table-driven checks: a field that should not be left
//! empty, a field with a known set of values, or a field whose value should
//! match a pattern. Each reports a warning per offending entry.

use std::sync::LazyLock;

use regex::Regex;

use super::bracket_list;
use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::manifest::document::Entry;
use crate::manifest::ManifestContext;

lazy_regex!(JVM_LEVEL, r"(?i)^(\d+\.?\d*|any)$");
lazy_regex!(MEMORY, r"(?i)^\d+(\.\d+)?(Gb|Mb|Kb|G|M|K|gb|mb|kb)$");
lazy_regex!(URL, r"(?i)^https?://[^\s/$.?#]+\S*$");

/// Warns when a field is present with an empty value.
pub struct EmptyFieldCheck {
    id: &'static str,
    name: &'static str,
    key: &'static str,
    message: &'static str,
}

impl EmptyFieldCheck {
    pub fn author() -> Self {
        Self {
            id: "author-field",
            name: "Author Field",
            key: "author",
            message: "Author field is present but empty. Consider providing author information",
        }
    }

    pub fn description() -> Self {
        Self {
            id: "description-field",
            name: "Description Field",
            key: "description",
            message: "Description field is present but empty. Consider providing a description",
        }
    }

    pub fn version() -> Self {
        Self {
            id: "version-field",
            name: "Version Field",
            key: "version",
            message: "Version field is present but empty. Consider providing version information",
        }
    }
}

impl Check<ManifestContext> for EmptyFieldCheck {
    fn id(&self) -> CheckId {
        CheckId::new(self.id)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Warns when an informational field is present but empty"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document(&format!("{} field", self.key)) {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        Ok(doc
            .entries()
            .iter()
            .filter(|e| e.key == self.key && e.value.is_empty())
            .map(|e| Issue::warning(self.message).at_line(e.line_no, &e.line))
            .collect())
    }
}

/// Warns when a field's value is outside a known set.
pub struct AllowedValuesCheck {
    id: &'static str,
    name: &'static str,
    key: &'static str,
    label: &'static str,
    allowed: &'static [&'static str],
}

impl AllowedValuesCheck {
    pub fn cpu_type() -> Self {
        Self {
            id: "cpu-type",
            name: "CPU Type",
            key: "cpuType",
            label: "CPU type",
            allowed: &["any", "Intel", "PowerPC", "Alpha"],
        }
    }

    pub fn os() -> Self {
        Self {
            id: "os-field",
            name: "Operating System",
            key: "os",
            label: "OS value",
            allowed: &["any", "Linux", "Windows", "Mac", "Unix", "Solaris"],
        }
    }

    pub fn privacy() -> Self {
        Self {
            id: "privacy-level",
            name: "Privacy Level",
            key: "privacy",
            label: "privacy level",
            allowed: &["public", "private"],
        }
    }

    pub fn quality() -> Self {
        Self {
            id: "quality-level",
            name: "Quality Level",
            key: "quality",
            label: "quality level",
            allowed: &["development", "preproduction", "production", "deprecated"],
        }
    }

    fn expected(&self) -> String {
        let mut allowed: Vec<&str> = self.allowed.to_vec();
        allowed.sort_unstable();
        bracket_list(allowed.iter().map(|v| format!("'{}'", v)))
    }
}

impl Check<ManifestContext> for AllowedValuesCheck {
    fn id(&self) -> CheckId {
        CheckId::new(self.id)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Warns when a field uses a value outside the known set"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document(self.label) {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        Ok(doc
            .entries()
            .iter()
            .filter(|e| e.key == self.key && !self.allowed.contains(&e.value.as_str()))
            .map(|e| {
                Issue::warning(format!(
                    "Unusual {} '{}'. Expected one of: {}",
                    self.label,
                    e.value,
                    self.expected()
                ))
                .at_line(e.line_no, &e.line)
            })
            .collect())
    }
}

/// Warns when a non-empty field value does not match a pattern.
pub struct FieldFormatCheck {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    keys: &'static [&'static str],
    pattern: &'static LazyLock<Regex>,
    message: fn(&Entry) -> String,
}

impl FieldFormatCheck {
    pub fn jvm_level() -> Self {
        Self {
            id: "jvm-level",
            name: "JVM Level",
            description: "Validates JVMLevel is a version number or 'any'",
            keys: &["JVMLevel"],
            pattern: &JVM_LEVEL,
            message: |e| {
                format!(
                    "JVMLevel '{}' does not match expected format (e.g., '1.8', '11', 'any')",
                    e.value
                )
            },
        }
    }

    pub fn memory() -> Self {
        Self {
            id: "memory-spec",
            name: "Memory Specification",
            description: "Validates job.memory is a number with a unit",
            keys: &["job.memory"],
            pattern: &MEMORY,
            message: |e| {
                format!(
                    "Memory specification '{}' may not follow standard format. \
                     Expected format: <number><unit> (e.g., 8Gb, 4Mb)",
                    e.value
                )
            },
        }
    }

    pub fn urls() -> Self {
        Self {
            id: "url-fields",
            name: "URL Fields",
            description: "Validates src.repo and documentationUrl are http(s) URLs",
            keys: &["src.repo", "documentationUrl"],
            pattern: &URL,
            message: |e| {
                format!(
                    "Field '{}' value '{}' does not appear to be a valid URL",
                    e.key, e.value
                )
            },
        }
    }
}

impl Check<ManifestContext> for FieldFormatCheck {
    fn id(&self) -> CheckId {
        CheckId::new(self.id)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document(self.name) {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        Ok(doc
            .entries()
            .iter()
            .filter(|e| self.keys.contains(&e.key.as_str()) && !e.value.is_empty())
            .filter(|e| !self.pattern.is_match(&e.value))
            .map(|e| Issue::warning((self.message)(e)).at_line(e.line_no, &e.line))
            .collect())
    }
}
