use std::fs;

use crate::dockerfile::{DockerfileContext, FILE_NAME};
use crate::lint::{Check, CheckId, Issue, Target};

/// Naming, readability and a leading `FROM`.
pub struct FileValidationCheck;

impl Check<DockerfileContext> for FileValidationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-validation")
    }

    fn name(&self) -> &str {
        "File Validation"
    }

    fn description(&self) -> &str {
        "Validates the Dockerfile is readable and starts with FROM"
    }

    fn run(&self, target: &Target, _ctx: &mut DockerfileContext) -> anyhow::Result<Vec<Issue>> {
        let Some(path) = target.path() else {
            anyhow::bail!("Dockerfile targets must be local files");
        };
        let path = std::path::absolute(path)?;

        if !path.exists() {
            return Ok(vec![Issue::error(format!(
                "Dockerfile does not exist: {}",
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
        if file_name != FILE_NAME && !file_name.ends_with(".dockerfile") {
            issues.push(
                Issue::warning(format!("Dockerfile has non-standard name: {}", file_name))
                    .with_context("Expected 'Dockerfile' or '*.dockerfile'"),
            );
        }

        let content = match fs::read(&path).map(String::from_utf8) {
            Ok(Ok(content)) => content,
            Ok(Err(_)) => {
                issues.push(Issue::error("Dockerfile contains invalid UTF-8 encoding"));
                return Ok(issues);
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                issues.push(Issue::error("Cannot read Dockerfile: Permission denied"));
                return Ok(issues);
            }
            Err(e) => {
                issues.push(Issue::error(format!("Failed to read Dockerfile: {}", e)));
                return Ok(issues);
            }
        };

        if content.trim().is_empty() {
            issues.push(Issue::error("Dockerfile is empty"));
            return Ok(issues);
        }
        let first_instruction = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'));
        match first_instruction {
            None => issues.push(Issue::error("Dockerfile contains no instructions")),
            Some(line) if !line.to_ascii_uppercase().starts_with("FROM") => {
                issues.push(Issue::error(
                    "Dockerfile must start with FROM instruction as first non-comment line",
                ))
            }
            Some(_) => {}
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn run(path: &Path) -> Vec<Issue> {
        FileValidationCheck
            .run(&Target::File(path.to_path_buf()), &mut DockerfileContext::default())
            .unwrap()
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn comments_before_from_are_fine() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "Dockerfile", "# syntax\n\nfrom python:3.11\nRUN true\n");
        assert!(run(&path).is_empty());
    }

    #[test]
    fn dockerfile_extension_accepted() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "gpu.dockerfile", "FROM ubuntu\n");
        assert!(run(&path).is_empty());
    }

    #[test]
    fn non_standard_name_warns() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "Containerfile", "FROM ubuntu\n");
        let issues = run(&path);
        assert_eq!(issues[0].message, "Dockerfile has non-standard name: Containerfile");
    }

    #[test]
    fn must_start_with_from() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "Dockerfile", "# base\nRUN apt-get update\nFROM ubuntu\n");
        assert_eq!(
            run(&path)[0].message,
            "Dockerfile must start with FROM instruction as first non-comment line"
        );
    }

    #[test]
    fn only_comments() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "Dockerfile", "# nothing here\n");
        assert_eq!(run(&path)[0].message, "Dockerfile contains no instructions");
    }

    #[test]
    fn empty() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "Dockerfile", "   \n");
        assert_eq!(run(&path)[0].message, "Dockerfile is empty");
    }
}
