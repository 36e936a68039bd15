use std::fs;

use crate::lint::{Check, CheckId, Issue, Target};
use crate::paramgroups::{ParamgroupsContext, FILE_NAME};

/// Reads and parses the paramgroups file, storing the document in the context.
pub struct FileValidationCheck;

impl Check<ParamgroupsContext> for FileValidationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-validation")
    }

    fn name(&self) -> &str {
        "File Validation"
    }

    fn description(&self) -> &str {
        "Validates the file exists, is named paramgroups.json and parses as JSON"
    }

    fn run(&self, target: &Target, ctx: &mut ParamgroupsContext) -> anyhow::Result<Vec<Issue>> {
        let Some(path) = target.path() else {
            anyhow::bail!("paramgroups targets must be local files");
        };
        let path = std::path::absolute(path)?;

        if !path.exists() {
            return Ok(vec![Issue::error(format!(
                "Paramgroups file does not exist: {}",
                path.display()
            ))]);
        }
        if !path.is_file() {
            return Ok(vec![Issue::error(format!(
                "Path is not a regular file: {}",
                path.display()
            ))]);
        }

        let mut issues = Vec::new();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if file_name != FILE_NAME {
            issues.push(
                Issue::warning(format!(
                    "Paramgroups file has non-standard name: {}",
                    file_name
                ))
                .with_context(format!("Expected '{}'", FILE_NAME)),
            );
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                issues.push(Issue::error("Cannot read paramgroups file: Permission denied"));
                return Ok(issues);
            }
            Err(e) => {
                issues.push(Issue::error(format!("Failed to read paramgroups file: {}", e)));
                return Ok(issues);
            }
        };
        let Ok(content) = String::from_utf8(bytes) else {
            issues.push(Issue::error("Paramgroups file contains invalid UTF-8 encoding"));
            return Ok(issues);
        };
        if content.trim().is_empty() {
            issues.push(Issue::error("Paramgroups file is empty"));
            return Ok(issues);
        }

        match serde_json::from_str(&content) {
            Ok(data) => ctx.parsed = Some(data),
            Err(e) => issues.push(Issue::error(format!("Invalid JSON format: {}", e))),
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn run(path: &Path) -> (Vec<Issue>, ParamgroupsContext) {
        let mut ctx = ParamgroupsContext::default();
        let issues = FileValidationCheck
            .run(&Target::File(path.to_path_buf()), &mut ctx)
            .unwrap();
        (issues, ctx)
    }

    #[test]
    fn parses_valid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paramgroups.json");
        fs::write(&path, r#"[{"name": "Inputs", "parameters": ["input.file"]}]"#).unwrap();

        let (issues, ctx) = run(&path);
        assert!(issues.is_empty());
        assert!(ctx.parsed.is_some_and(|d| d.is_array()));
    }

    #[test]
    fn non_standard_name_warns() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("groups.json");
        fs::write(&path, "[]").unwrap();

        let (issues, _) = run(&path);
        assert_eq!(issues[0].format(), "WARNING: Paramgroups file has non-standard name: groups.json (Expected 'paramgroups.json')");
    }

    #[test]
    fn empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paramgroups.json");
        fs::write(&path, "\n").unwrap();

        let (issues, ctx) = run(&path);
        assert_eq!(issues[0].message, "Paramgroups file is empty");
        assert!(ctx.parsed.is_none());
    }

    #[test]
    fn invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paramgroups.json");
        fs::write(&path, "[{").unwrap();

        let (issues, _) = run(&path);
        assert!(issues[0].message.starts_with("Invalid JSON format: "));
    }

    #[test]
    fn missing_file() {
        let temp = TempDir::new().unwrap();
        let (issues, _) = run(&temp.path().join("paramgroups.json"));
        assert!(issues[0].message.starts_with("Paramgroups file does not exist: "));
    }
}
