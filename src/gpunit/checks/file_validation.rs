//! File-level validation: existence, extension, encoding and YAML syntax.

use std::fs;

use crate::gpunit::GpunitContext;
use crate::lint::{Check, CheckId, Issue, Target};

/// Reads and parses the GPUnit file, storing the document in the context.
pub struct FileValidationCheck;

impl Check<GpunitContext> for FileValidationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-validation")
    }

    fn name(&self) -> &str {
        "File Validation"
    }

    fn description(&self) -> &str {
        "Validates the file exists, is UTF-8 and parses as YAML"
    }

    fn run(&self, target: &Target, ctx: &mut GpunitContext) -> anyhow::Result<Vec<Issue>> {
        let Some(path) = target.path() else {
            anyhow::bail!("GPUnit targets must be local files");
        };
        let path = std::path::absolute(path)?;

        if !path.exists() {
            return Ok(vec![Issue::error(format!(
                "GPUnit file does not exist: {}",
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
        if !file_name.ends_with(".yml") {
            issues.push(
                Issue::warning(format!(
                    "GPUnit file should end with .yml extension: {}",
                    file_name
                ))
                .with_context("Expected *.yml"),
            );
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                issues.push(Issue::error("Cannot read GPUnit file: Permission denied"));
                return Ok(issues);
            }
            Err(e) => {
                issues.push(Issue::error(format!("Failed to read GPUnit file: {}", e)));
                return Ok(issues);
            }
        };
        let Ok(content) = String::from_utf8(bytes) else {
            issues.push(Issue::error("GPUnit file contains invalid UTF-8 encoding"));
            return Ok(issues);
        };

        if content.trim().is_empty() {
            issues.push(Issue::error("GPUnit file is empty"));
            return Ok(issues);
        }

        match serde_yaml::from_str::<serde_yaml::Value>(&content) {
            Ok(serde_yaml::Value::Null) => {
                issues.push(Issue::error("GPUnit file contains no valid YAML data"));
            }
            Ok(data) => ctx.parsed = Some(data),
            Err(e) => issues.push(Issue::error(format!("Invalid YAML format: {}", e))),
        }
        ctx.content = Some(content);
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn run(path: &Path) -> (Vec<Issue>, GpunitContext) {
        let mut ctx = GpunitContext::default();
        let issues = FileValidationCheck
            .run(&Target::File(path.to_path_buf()), &mut ctx)
            .unwrap();
        (issues, ctx)
    }

    #[test]
    fn valid_yaml_is_stored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yml");
        fs::write(&path, "name: t\nmodule: M\n").unwrap();

        let (issues, ctx) = run(&path);
        assert!(issues.is_empty());
        assert!(ctx.parsed.is_some());
        assert!(ctx.content.is_some());
    }

    #[test]
    fn missing_file() {
        let (issues, _) = run(&PathBuf::from("/no/such/test.yml"));
        assert_eq!(issues[0].message, "GPUnit file does not exist: /no/such/test.yml");
    }

    #[test]
    fn directory_is_not_regular_file() {
        let temp = TempDir::new().unwrap();
        let (issues, _) = run(temp.path());
        assert!(issues[0].message.starts_with("Path is not a regular file: "));
    }

    #[test]
    fn wrong_extension_warns_but_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yaml");
        fs::write(&path, "name: t\n").unwrap();

        let (issues, ctx) = run(&path);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.as_deref(), Some("Expected *.yml"));
        assert!(ctx.parsed.is_some());
    }

    #[test]
    fn empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yml");
        fs::write(&path, "  \n").unwrap();

        let (issues, ctx) = run(&path);
        assert_eq!(issues[0].message, "GPUnit file is empty");
        assert!(ctx.parsed.is_none());
    }

    #[test]
    fn null_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yml");
        fs::write(&path, "---\n# nothing\n").unwrap();

        let (issues, ctx) = run(&path);
        assert_eq!(issues[0].message, "GPUnit file contains no valid YAML data");
        assert!(ctx.parsed.is_none());
    }

    #[test]
    fn invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yml");
        fs::write(&path, "name: [unclosed\n").unwrap();

        let (issues, _) = run(&path);
        assert!(issues[0].message.starts_with("Invalid YAML format: "));
    }

    #[test]
    fn invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yml");
        fs::write(&path, [b'n', b':', b' ', 0xFF, 0xFE]).unwrap();

        let (issues, _) = run(&path);
        assert_eq!(issues[0].message, "GPUnit file contains invalid UTF-8 encoding");
    }
}
