//! Searches the documentation text for the module and its parameters.
//!
//! A name counts as documented when it appears verbatim, in another case,
//! or in one of a few usage shapes (`--name`, `name=`, `<name>`, ...).

use crate::documentation::DocumentationContext;
use crate::lint::{pattern, Check, CheckId, Issue, Target};

/// Usage shapes around a module name; `{}` is the escaped name.
const MODULE_SHAPES: [(&str, &str); 6] = [
    ("whole word", r"\b{}\b"),
    ("Python file", r"{}\.py"),
    ("Java archive", r"{}\.jar"),
    ("'module <name>'", r"module\s+{}"),
    ("'<name> module'", r"{}\s+module"),
    ("'class <name>'", r"class\s+{}"),
];

/// Usage shapes around a parameter name; `{}` is the escaped name.
const PARAMETER_SHAPES: [(&str, &str); 10] = [
    ("whole word", r"\b{}\b"),
    ("'param <name>'", r"param\w*[:\s]+{}"),
    ("'<name>: value'", r"{}[:\s]+\w+"),
    ("'--<name>'", r"--{}\b"),
    ("'-<name>'", r"-{}\b"),
    ("'<name>='", r"{}="),
    ("'<<name>>'", r"<{}>"),
    ("'$<name>'", r"\${}\b"),
    ("'<name>.file'", r"{}\.file"),
    ("'<name>.name'", r"{}\.name"),
];

fn literal_matches(content: &str, name: &str) -> Vec<String> {
    if content.contains(name) {
        vec![format!("Exact match: '{}'", name)]
    } else if content.to_lowercase().contains(&name.to_lowercase()) {
        vec![format!("Case-insensitive match for '{}'", name)]
    } else {
        Vec::new()
    }
}

fn shape_matches(content: &str, name: &str, shapes: &[(&str, &str)]) -> Vec<String> {
    let escaped = regex::escape(name);
    shapes
        .iter()
        .filter(|(_, shape)| {
            pattern::is_match(&format!("(?i){}", shape.replace("{}", &escaped)), content)
        })
        .map(|(label, _)| format!("Pattern match: {}", label))
        .collect()
}

/// Every way `module` is mentioned in `content`.
pub fn module_mentions(content: &str, module: &str) -> Vec<String> {
    if content.is_empty() || module.is_empty() {
        return Vec::new();
    }
    let mut matches = literal_matches(content, module);
    matches.extend(shape_matches(content, module, &MODULE_SHAPES));

    if module.to_lowercase().contains("urn:lsid:") {
        let parts: Vec<&str> = module.split(':').collect();
        if let (true, Some(id)) = (parts.len() >= 5, parts.last()) {
            if content.to_lowercase().contains(&id.to_lowercase()) {
                matches.push(format!("LSID module identifier match: '{}'", id));
            }
        }
    }
    matches
}

/// Every way `parameter` is mentioned in `content`.
pub fn parameter_mentions(content: &str, parameter: &str) -> Vec<String> {
    if content.is_empty() || parameter.is_empty() {
        return Vec::new();
    }
    let mut matches = literal_matches(content, parameter);
    matches.extend(shape_matches(content, parameter, &PARAMETER_SHAPES));

    if let Some((base, _)) = parameter.split_once('.') {
        if content.to_lowercase().contains(&base.to_lowercase()) {
            matches.push(format!(
                "Base parameter match: '{}' (from '{}')",
                base, parameter
            ));
        }
    }
    matches
}

/// The documentation mentions the expected module.
pub struct ModuleMentionCheck;

impl Check<DocumentationContext> for ModuleMentionCheck {
    fn id(&self) -> CheckId {
        CheckId::new("module-validation")
    }

    fn name(&self) -> &str {
        "Module Validation"
    }

    fn description(&self) -> &str {
        "Validates the documentation mentions the module given with --module"
    }

    fn run(&self, _target: &Target, ctx: &mut DocumentationContext) -> anyhow::Result<Vec<Issue>> {
        let Some(module) = ctx.expected_module.as_deref().filter(|m| !m.is_empty()) else {
            return Ok(vec![Issue::info(
                "Module validation skipped - no expected module provided",
            )
            .with_context("Use --module to enable module validation")]);
        };
        let Some(content) = &ctx.content else {
            return Ok(vec![Issue::error(
                "Cannot validate module: document content not available",
            )
            .with_context("Content retrieval must pass before module validation")]);
        };

        let matches = module_mentions(content, module);
        if matches.is_empty() {
            return Ok(vec![Issue::error(format!(
                "Module name '{}' not found in documentation",
                module
            ))
            .with_context("Module should be mentioned in the documentation")]);
        }
        Ok(matches
            .into_iter()
            .map(|m| Issue::info(format!("Module found: {}", m)))
            .collect())
    }
}

/// The documentation mentions every expected parameter.
pub struct ParameterMentionCheck;

impl Check<DocumentationContext> for ParameterMentionCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-validation")
    }

    fn name(&self) -> &str {
        "Parameter Validation"
    }

    fn description(&self) -> &str {
        "Validates the documentation mentions each parameter given with --parameters"
    }

    fn run(&self, _target: &Target, ctx: &mut DocumentationContext) -> anyhow::Result<Vec<Issue>> {
        let Some(expected) = ctx.expected_parameters.as_ref().filter(|p| !p.is_empty()) else {
            return Ok(vec![Issue::info(
                "Parameter validation skipped - no expected parameters provided",
            )
            .with_context("Use --parameters to enable parameter validation")]);
        };
        let Some(content) = &ctx.content else {
            return Ok(vec![Issue::error(
                "Cannot validate parameters: document content not available",
            )
            .with_context("Content retrieval must pass before parameter validation")]);
        };

        let mut issues = Vec::new();
        let mut missing = 0;
        for param in expected {
            match parameter_mentions(content, param).into_iter().next() {
                Some(first) => {
                    issues.push(Issue::info(format!("Parameter '{}' found: {}", param, first)))
                }
                None => {
                    missing += 1;
                    issues.push(
                        Issue::error(format!("Parameter '{}' not found in documentation", param))
                            .with_context("All expected parameters should be documented"),
                    );
                }
            }
        }

        let total = expected.len();
        issues.push(if missing == 0 {
            Issue::info(format!(
                "All {} expected parameters found in documentation",
                total
            ))
        } else {
            Issue::info(format!(
                "Parameter validation summary: {}/{} parameters found, {} missing",
                total - missing,
                total,
                missing
            ))
        });
        Ok(issues)
    }
}
