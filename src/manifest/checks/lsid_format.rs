//! LSID shape validation.
//!
//! `urn:lsid:<authority>:<namespace>:<object>:<revision>` where the object is
//! an integer and the revision is numeric. Escaped separators (`\:`) are
//! treated as plain colons.

use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

lazy_regex!(
    LSID,
    r"(?i)^urn:lsid:[A-Za-z0-9._-]+:[A-Za-z0-9._-]+:[0-9]+:[0-9]+(?:\.[0-9]+)?$"
);

/// Replace escaped colons with literal ones.
pub fn normalize_lsid(value: &str) -> String {
    value.replace("\\:", ":")
}

/// Whether `value` is a well-formed LSID, escaped or not.
pub fn is_valid_lsid(value: &str) -> bool {
    LSID.is_match(&normalize_lsid(value))
}

/// Validates every `LSID` entry.
pub struct LsidFormatCheck;

impl Check<ManifestContext> for LsidFormatCheck {
    fn id(&self) -> CheckId {
        CheckId::new("lsid-format")
    }

    fn name(&self) -> &str {
        "LSID Format"
    }

    fn description(&self) -> &str {
        "Validates the LSID follows urn:lsid:Authority:Namespace:Object:Revision"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("LSID format") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        Ok(doc
            .entries()
            .iter()
            .filter(|e| e.key == "LSID" && !is_valid_lsid(&e.value))
            .map(|e| {
                Issue::error(
                    "LSID must follow 'urn:lsid:AuthorityID:NamespaceID:ObjectID:RevisionID' \
                     where ObjectID is an integer and RevisionID is numeric \
                     (escaped ':' via \\: accepted)",
                )
                .at_line(e.line_no, &e.line)
            })
            .collect())
    }
}
