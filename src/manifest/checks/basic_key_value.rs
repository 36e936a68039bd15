//! Basic `key=value` syntax.
//!
//! Every statement line needs an `=`, a non-empty key, and a key free of
//! whitespace and the characters `=`, `:` and `#`.

use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

lazy_regex!(KEY_VALID, r"^[^\s=:#][^=:#]*$");

/// Validates line syntax.
pub struct BasicKeyValueCheck;

impl Check<ManifestContext> for BasicKeyValueCheck {
    fn id(&self) -> CheckId {
        CheckId::new("basic-key-value")
    }

    fn name(&self) -> &str {
        "Basic Key/Value Format"
    }

    fn description(&self) -> &str {
        "Validates every line follows key=value with a well-formed key"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("key=value format") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let mut issues = Vec::new();
        for stmt in doc.statements() {
            let Some((key, _)) = stmt.line.split_once('=') else {
                issues.push(
                    Issue::error("Expected key=value format with '=' separator")
                        .at_line(stmt.line_no, &stmt.line),
                );
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                issues.push(
                    Issue::error("Empty key before '=' is not allowed")
                        .at_line(stmt.line_no, &stmt.line),
                );
            } else if !KEY_VALID.is_match(key) {
                issues.push(
                    Issue::error(
                        "Invalid key: keys must not contain whitespace or the characters '=' ':' '#'",
                    )
                    .at_line(stmt.line_no, &stmt.line),
                );
            }
        }
        Ok(issues)
    }
}
