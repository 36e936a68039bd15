use std::path::Path;

use crate::dockerfile::context::truncate;
use crate::dockerfile::{DockerCli, DockerfileContext};
use crate::error::LintError;
use crate::lint::{Check, CheckId, Issue, Target};

const OUTPUT_LIMIT: usize = 500;

/// Builds the image from the Dockerfile's directory.
///
/// A successful build records the tag for the runtime check. Without a
/// runtime command the image is removed straight away unless cleanup is off.
pub struct BuildCheck {
    docker: DockerCli,
    tag_prefix: String,
}

impl BuildCheck {
    pub fn new(docker: DockerCli, tag_prefix: impl Into<String>) -> Self {
        Self {
            docker,
            tag_prefix: tag_prefix.into(),
        }
    }
}

impl Check<DockerfileContext> for BuildCheck {
    fn id(&self) -> CheckId {
        CheckId::new("build-validation")
    }

    fn name(&self) -> &str {
        "Build Validation"
    }

    fn description(&self) -> &str {
        "Validates the image builds with docker build"
    }

    fn run(&self, target: &Target, ctx: &mut DockerfileContext) -> anyhow::Result<Vec<Issue>> {
        if !ctx.build {
            return Ok(vec![Issue::info("Build validation skipped - image build disabled")
                .with_context("Remove --no-build to enable build validation")]);
        }
        if ctx.docker_available == Some(false) {
            ctx.build_success = Some(false);
            return Ok(vec![Issue::error("Cannot build image: Docker is not available")
                .with_context("Docker availability must pass before build validation")]);
        }
        let Some(path) = target.path() else {
            anyhow::bail!("Dockerfile targets must be local files");
        };
        let dockerfile = std::path::absolute(path)?;
        let context_dir = dockerfile.parent().unwrap_or(Path::new(".")).to_path_buf();
        let tag = match &ctx.tag {
            Some(tag) if !tag.is_empty() => tag.clone(),
            _ => default_tag(&self.tag_prefix, &context_dir),
        };

        let file_arg = dockerfile.to_string_lossy();
        let dir_arg = context_dir.to_string_lossy();
        let rendered = self
            .docker
            .render(&["build", "-t", tag.as_str(), "-f", &*file_arg, &*dir_arg]);
        tracing::info!("Building image {}", tag);

        let mut issues = Vec::new();
        let result = match self.docker.build(&tag, &dockerfile, &context_dir) {
            Ok(result) => result,
            Err(LintError::ToolNotFound { .. }) => {
                ctx.build_success = Some(false);
                return Ok(vec![Issue::error("Docker CLI not found")
                    .with_context("Ensure Docker Desktop/Engine is installed and docker is on PATH")]);
            }
            Err(e) => {
                ctx.build_success = Some(false);
                return Ok(vec![Issue::error(format!("Failed to run Docker build: {}", e))]);
            }
        };

        if result.timed_out {
            ctx.build_success = Some(false);
            issues.push(
                Issue::error(format!(
                    "Docker build timed out after {} seconds",
                    self.docker.build_timeout().as_secs()
                ))
                .with_context(format!("Build command: {}", rendered)),
            );
        } else if !result.success {
            ctx.build_success = Some(false);
            issues.push(
                Issue::error(format!("Docker build failed for {}", dockerfile.display()))
                    .with_context(format!("Build command: {}", rendered)),
            );
            issues.extend(
                result
                    .stderr
                    .lines()
                    .map(str::trim)
                    .filter(|line| {
                        line.to_ascii_uppercase().contains("ERROR")
                            || line.to_ascii_lowercase().contains("failed")
                    })
                    .map(|line| Issue::error(format!("Build error: {}", line))),
            );
            if issues.len() == 1 {
                let output = match result.stderr.trim() {
                    "" => result.stdout.trim(),
                    stderr => stderr,
                };
                if !output.is_empty() {
                    issues.push(Issue::error(format!(
                        "Full build output: {}",
                        truncate(output, OUTPUT_LIMIT)
                    )));
                }
            }
        } else {
            ctx.build_success = Some(true);
            ctx.built_tag = Some(tag.clone());
            if ctx.cleanup && ctx.command.is_none() {
                issues.extend(remove_image(&self.docker, &tag));
            }
        }
        Ok(issues)
    }
}

/// `<prefix>/<directory>:<YYYYmmdd-HHMMSS>`, lowercased as Docker requires.
pub fn default_tag(prefix: &str, context_dir: &Path) -> String {
    let base = context_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "dockerfile-test".to_string());
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("{}/{}:{}", prefix, base, stamp)
}

/// Remove `tag`, reporting success as INFO. Failures are only logged.
pub(crate) fn remove_image(docker: &DockerCli, tag: &str) -> Option<Issue> {
    match docker.remove_image(tag) {
        Ok(result) if result.success => {
            Some(Issue::info(format!("Cleaned up Docker image: {}", tag)))
        }
        Ok(result) => {
            tracing::warn!("Could not remove image {}: {}", tag, result.stderr.trim());
            None
        }
        Err(e) => {
            tracing::warn!("Could not remove image {}: {}", tag, e);
            None
        }
    }
}
