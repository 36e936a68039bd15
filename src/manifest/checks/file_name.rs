//! Manifest file name validation.

use crate::lint::{Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

/// The manifest must be called exactly `manifest`.
pub struct FileNameCheck;

impl Check<ManifestContext> for FileNameCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-name")
    }

    fn name(&self) -> &str {
        "File Name"
    }

    fn description(&self) -> &str {
        "Validates the file is named exactly 'manifest'"
    }

    fn run(&self, target: &Target, _ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let base = target
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if base == "manifest" {
            return Ok(vec![]);
        }
        Ok(vec![Issue::error(format!(
            "Manifest filename must be exactly 'manifest' (lowercase); found '{}'",
            base
        ))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(path: &str) -> Vec<Issue> {
        FileNameCheck
            .run(
                &Target::File(PathBuf::from(path)),
                &mut ManifestContext::default(),
            )
            .unwrap()
    }

    #[test]
    fn accepts_manifest() {
        assert!(run("module/manifest").is_empty());
    }

    #[test]
    fn rejects_other_case() {
        let issues = run("module/Manifest");
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Manifest filename must be exactly 'manifest' (lowercase); found 'Manifest'"
        );
    }
}
