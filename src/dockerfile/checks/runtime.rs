use crate::dockerfile::checks::build::remove_image;
use crate::dockerfile::context::truncate;
use crate::dockerfile::{DockerCli, DockerfileContext};
use crate::error::LintError;
use crate::lint::{Check, CheckId, Issue, Target};

const OUTPUT_LIMIT: usize = 300;

/// Runs `--cmd` in the built image through `sh -lc`.
pub struct RuntimeCheck {
    docker: DockerCli,
}

impl RuntimeCheck {
    pub fn new(docker: DockerCli) -> Self {
        Self { docker }
    }
}

impl Check<DockerfileContext> for RuntimeCheck {
    fn id(&self) -> CheckId {
        CheckId::new("runtime-validation")
    }

    fn name(&self) -> &str {
        "Runtime Validation"
    }

    fn description(&self) -> &str {
        "Validates a command runs successfully in the built image"
    }

    fn run(&self, _target: &Target, ctx: &mut DockerfileContext) -> anyhow::Result<Vec<Issue>> {
        let Some(command) = ctx.command.clone() else {
            return Ok(vec![Issue::info("Runtime testing skipped - no command provided")
                .with_context("Use --cmd to enable runtime validation")]);
        };
        if !ctx.build {
            return Ok(vec![Issue::info("Runtime testing skipped - image build disabled")
                .with_context("Remove --no-build to enable runtime validation")]);
        }
        if ctx.build_success == Some(false) {
            return Ok(vec![Issue::error("Cannot test runtime: Docker build failed")
                .with_context("Build validation must pass before runtime testing")]);
        }
        let Some(tag) = ctx.built_tag.clone() else {
            return Ok(vec![Issue::error("Cannot test runtime: No Docker tag available")
                .with_context("Build validation must provide a tag for runtime testing")]);
        };

        let rendered = self
            .docker
            .render(&["run", "--rm", "--entrypoint", "sh", &tag, "-lc", &command]);
        let mut issues = match self.docker.run_shell(&tag, &command) {
            Ok(result) if result.timed_out => vec![Issue::error(format!(
                "Container runtime timed out after {} seconds for command: {}",
                self.docker.run_timeout().as_secs(),
                command
            ))
            .with_context(format!("Run command: {}", rendered))],
            Ok(result) if !result.success => {
                failure_issues(&command, &rendered, &result.stdout, &result.stderr)
            }
            Ok(result) => {
                let output = result.stdout.trim();
                if output.is_empty() {
                    Vec::new()
                } else {
                    vec![Issue::info(format!("Runtime test output: {}", output))
                        .with_context(format!("Command: {}", command))]
                }
            }
            Err(LintError::ToolNotFound { .. }) => vec![Issue::error("Docker CLI not found")
                .with_context("Ensure Docker Desktop/Engine is installed and docker is on PATH")],
            Err(e) => vec![Issue::error(format!("Failed to run container: {}", e))],
        };

        if ctx.cleanup {
            issues.extend(remove_image(&self.docker, &tag));
        }
        Ok(issues)
    }
}

fn failure_issues(command: &str, rendered: &str, stdout: &str, stderr: &str) -> Vec<Issue> {
    let mut issues = vec![
        Issue::error(format!("Container runtime failed for command: {}", command))
            .with_context(format!("Run command: {}", rendered)),
    ];
    issues.extend(
        stderr
            .lines()
            .map(str::trim)
            .filter(|line| {
                let lower = line.to_ascii_lowercase();
                lower.contains("error") || lower.contains("failed")
            })
            .map(|line| Issue::error(format!("Runtime error: {}", line))),
    );
    if stderr.to_ascii_lowercase().contains("executable file not found") && stderr.contains("sh") {
        issues.push(
            Issue::error("Container does not have POSIX shell (sh)").with_context(
                "Image may be based on scratch or distroless - cannot run shell commands",
            ),
        );
    }
    if issues.len() == 1 {
        let output = match stderr.trim() {
            "" => stdout.trim(),
            stderr => stderr,
        };
        if !output.is_empty() {
            issues.push(Issue::error(format!(
                "Runtime output: {}",
                truncate(output, OUTPUT_LIMIT)
            )));
        }
    }
    issues
}
