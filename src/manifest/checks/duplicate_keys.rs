//! Duplicate key detection.

use std::collections::HashMap;

use crate::lint::{Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

/// Each key may be defined once.
pub struct DuplicateKeysCheck;

impl Check<ManifestContext> for DuplicateKeysCheck {
    fn id(&self) -> CheckId {
        CheckId::new("duplicate-keys")
    }

    fn name(&self) -> &str {
        "Duplicate Keys"
    }

    fn description(&self) -> &str {
        "Detects keys defined more than once"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("duplicate keys") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut issues = Vec::new();
        for entry in doc.entries() {
            match first_seen.get(entry.key.as_str()) {
                Some(prev) => issues.push(
                    Issue::error(format!(
                        "Duplicate key '{}' (previously defined at line {})",
                        entry.key, prev
                    ))
                    .at_line(entry.line_no, &entry.line),
                ),
                None => {
                    first_seen.insert(&entry.key, entry.line_no);
                }
            }
        }
        Ok(issues)
    }
}
