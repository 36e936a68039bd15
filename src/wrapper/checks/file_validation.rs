use std::fs;
use std::path::Path;

use crate::lint::{Check, CheckId, Issue, Target};
use crate::manifest::document::decode_text;
use crate::wrapper::{ScriptType, WrapperContext};

/// Reads the script, detects its language and reports basic facts about it.
pub struct FileValidationCheck;

impl Check<WrapperContext> for FileValidationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-validation")
    }

    fn name(&self) -> &str {
        "File Validation"
    }

    fn description(&self) -> &str {
        "Validates the script is readable and detects its language"
    }

    fn run(&self, target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let Some(path) = target.path() else {
            anyhow::bail!("Wrapper script targets must be local files");
        };
        let path = std::path::absolute(path)?;

        if !path.exists() {
            return Ok(vec![Issue::error(format!(
                "Script file does not exist: {}",
                path.display()
            ))]);
        }
        if !path.is_file() {
            return Ok(vec![Issue::error(format!(
                "Path is not a regular file: {}",
                path.display()
            ))]);
        }

        let content = match read_script(&path) {
            Ok(content) => content,
            Err(issue) => return Ok(vec![issue]),
        };
        ctx.content = Some(content.clone());

        if content.trim().is_empty() {
            return Ok(vec![Issue::error("Script file is empty")]);
        }

        let script_type = ScriptType::detect(&path, &content);
        ctx.script_type = Some(script_type);

        let mut issues = vec![Issue::info(format!(
            "Detected script type: {}",
            script_type.label()
        ))];

        let (executable, permissions) = permissions(&path);
        if executable {
            issues.push(Issue::info(format!(
                "Script file is executable ({})",
                permissions
            )));
        } else {
            issues.push(
                Issue::warning(format!("Script file is not executable ({})", permissions))
                    .with_context(format!(
                        "Consider setting execute permissions with: chmod +x {}",
                        path.display()
                    )),
            );
        }

        let lines: Vec<&str> = content.split('\n').collect();
        let non_empty = lines.iter().filter(|l| !l.trim().is_empty()).count();
        issues.push(Issue::info(format!(
            "Script contains {} lines ({} non-empty)",
            lines.len(),
            non_empty
        )));

        if lines[0].starts_with("#!") {
            issues.push(Issue::info(format!("Found shebang: {}", lines[0])));
        } else if matches!(
            script_type,
            ScriptType::Python | ScriptType::Bash | ScriptType::R
        ) {
            issues.push(
                Issue::warning(format!(
                    "No shebang found in {} script",
                    script_type.label()
                ))
                .with_context("Consider adding appropriate shebang line"),
            );
        }

        Ok(issues)
    }
}

/// UTF-8 first, Latin-1 for anything else.
fn read_script(path: &Path) -> Result<String, Issue> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => Issue::error(format!(
            "Permission denied reading script file: {}",
            path.display()
        )),
        _ => Issue::error(format!("Failed to read script file: {}", e)),
    })?;
    Ok(decode_text(bytes))
}

#[cfg(unix)]
fn permissions(path: &Path) -> (bool, String) {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) => {
            let mode = meta.permissions().mode();
            (mode & 0o111 != 0, format!("Permissions: {:03o}", mode & 0o777))
        }
        Err(e) => (false, format!("Could not check permissions: {}", e)),
    }
}

#[cfg(not(unix))]
fn permissions(_path: &Path) -> (bool, String) {
    (true, "Permissions: not applicable".to_string())
}
