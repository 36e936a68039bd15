//! `job.docker.image` validation.

use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

lazy_regex!(
    DOCKER_IMAGE,
    r"(?i)^[a-z0-9][a-z0-9._/-]*[a-z0-9]((:|\\:)[a-z0-9._-]+)?$"
);

/// Validates the module's container image reference.
///
/// An absent image is a warning; an empty one is an error.
pub struct DockerImageCheck;

impl Check<ManifestContext> for DockerImageCheck {
    fn id(&self) -> CheckId {
        CheckId::new("docker-image")
    }

    fn name(&self) -> &str {
        "Docker Image"
    }

    fn description(&self) -> &str {
        "Validates job.docker.image is set and looks like [registry/]name[:tag]"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("Docker image") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let Some(entry) = doc.get("job.docker.image") else {
            return Ok(vec![Issue::warning(
                "Missing required field 'job.docker.image'. This field must specify the Docker \
                 image tag for the module (e.g., job.docker.image=genepattern/mymodule\\:1)",
            )]);
        };

        if entry.value.is_empty() {
            return Ok(vec![Issue::error(
                "Field 'job.docker.image' is present but empty. Must specify a valid Docker image tag.",
            )
            .at_line(entry.line_no, &entry.line)]);
        }
        if !DOCKER_IMAGE.is_match(&entry.value) {
            return Ok(vec![Issue::warning(format!(
                "Docker image name '{}' may not follow standard format. Expected format: \
                 [registry/]name[:tag] (colon should be escaped as \\:)",
                entry.value
            ))
            .at_line(entry.line_no, &entry.line)]);
        }
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use crate::manifest::checks::run_on;

    #[test]
    fn escaped_and_plain_tags_pass() {
        assert!(run_on(&DockerImageCheck, "job.docker.image=genepattern/kallisto\\:1\n").is_empty());
        assert!(run_on(&DockerImageCheck, "job.docker.image=ghcr.io/lab/tool:v2.1\n").is_empty());
    }

    #[test]
    fn missing_is_warning() {
        let issues = run_on(&DockerImageCheck, "name=Foo\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.starts_with("Missing required field 'job.docker.image'"));
    }

    #[test]
    fn empty_is_error() {
        let issues = run_on(&DockerImageCheck, "job.docker.image=\n");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn odd_reference_is_warning() {
        let issues = run_on(&DockerImageCheck, "job.docker.image=Not An Image!\n");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].line_no, Some(1));
    }
}
