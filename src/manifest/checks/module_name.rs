//! Module name conventions.

use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

lazy_regex!(MODULE_NAME, r"^[a-zA-Z0-9._-]+$");

/// Validates every `name` entry.
pub struct ModuleNameCheck;

impl Check<ManifestContext> for ModuleNameCheck {
    fn id(&self) -> CheckId {
        CheckId::new("module-name")
    }

    fn name(&self) -> &str {
        "Module Name"
    }

    fn description(&self) -> &str {
        "Validates the module name is non-empty and uses conventional characters"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("module name") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let mut issues = Vec::new();
        for entry in doc.entries().iter().filter(|e| e.key == "name") {
            let value = &entry.value;
            let issue = if value.is_empty() {
                Issue::error("Module name field is present but empty")
            } else if !MODULE_NAME.is_match(value) {
                Issue::warning(format!(
                    "Module name '{}' contains unusual characters. Recommended to use only \
                     alphanumeric, dots, underscores, and hyphens",
                    value
                ))
            } else if value.starts_with('.') || value.ends_with('.') {
                Issue::warning(format!(
                    "Module name '{}' starts or ends with a dot, which is unusual",
                    value
                ))
            } else {
                continue;
            };
            issues.push(issue.at_line(entry.line_no, &entry.line));
        }
        Ok(issues)
    }
}
