//! Required keys.

use crate::lint::{Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

/// Keys every manifest must define, in report order.
pub const REQUIRED_KEYS: [&str; 3] = ["LSID", "commandLine", "name"];

/// Validates `LSID`, `commandLine` and `name` are present.
pub struct RequiredKeysCheck;

impl Check<ManifestContext> for RequiredKeysCheck {
    fn id(&self) -> CheckId {
        CheckId::new("required-keys")
    }

    fn name(&self) -> &str {
        "Required Keys"
    }

    fn description(&self) -> &str {
        "Validates LSID, commandLine and name are defined"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("required keys") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        Ok(REQUIRED_KEYS
            .iter()
            .filter(|key| !doc.contains_key(key))
            .map(|key| Issue::error(format!("Missing required key '{}'", key)))
            .collect())
    }
}
