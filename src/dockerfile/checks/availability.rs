use crate::dockerfile::{DockerCli, DockerfileContext};
use crate::error::LintError;
use crate::lint::{Check, CheckId, Issue, Severity, Target};

/// Probes the Docker daemon and records whether it answered.
///
/// With the build disabled nothing depends on Docker, so problems are
/// reported as warnings.
pub struct DockerAvailabilityCheck {
    docker: DockerCli,
}

impl DockerAvailabilityCheck {
    pub fn new(docker: DockerCli) -> Self {
        Self { docker }
    }
}

impl Check<DockerfileContext> for DockerAvailabilityCheck {
    fn id(&self) -> CheckId {
        CheckId::new("docker-availability")
    }

    fn name(&self) -> &str {
        "Docker Availability"
    }

    fn description(&self) -> &str {
        "Validates the Docker CLI is installed and the daemon responds"
    }

    fn run(&self, _target: &Target, ctx: &mut DockerfileContext) -> anyhow::Result<Vec<Issue>> {
        let mut issues = Vec::new();
        match self.docker.version() {
            Ok(result) if result.success => {
                tracing::debug!("Docker server version {}", result.stdout.trim());
            }
            Ok(result) => {
                let context = match result.exit_code {
                    Some(code) if !result.timed_out => {
                        format!("Command failed with exit code {}", code)
                    }
                    _ => format!(
                        "Command did not finish within {} seconds",
                        self.docker.run_timeout().as_secs()
                    ),
                };
                issues.push(
                    Issue::error("Docker daemon is not running or accessible").with_context(context),
                );
                let stderr = result.stderr.trim();
                if !stderr.is_empty() {
                    issues.push(Issue::error(format!("Docker error: {}", stderr)));
                }
            }
            Err(LintError::ToolNotFound { .. }) => issues.push(
                Issue::error("Docker CLI not found")
                    .with_context("Ensure Docker Desktop/Engine is installed and 'docker' is on PATH"),
            ),
            Err(e) => issues.push(Issue::error(format!(
                "Failed to check Docker availability: {}",
                e
            ))),
        }
        ctx.docker_available = Some(issues.is_empty());
        if !ctx.build {
            for issue in &mut issues {
                issue.severity = Severity::Warning;
            }
        }
        Ok(issues)
    }
}
