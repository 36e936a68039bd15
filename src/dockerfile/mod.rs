//! Dockerfile validation.
//!
//! Beyond static checks of the file, this format exercises Docker itself:
//! the daemon is probed, the image is built from the Dockerfile's
//! directory and, when a command is given, run once in a throwaway
//! container. Images are removed afterwards unless cleanup is disabled.

pub mod checks;
pub mod context;
pub mod docker;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{LintError, Result};
use crate::lint::{run_pipeline_with, CheckRegistry, PipelineObserver, Target, Validation};

pub use context::DockerfileContext;
pub use docker::DockerCli;

/// Format identifier.
pub const FORMAT: &str = "dockerfile";

/// Noun used in reports.
pub const NOUN: &str = "Dockerfile";

/// Conventional file name inside a module directory.
pub const FILE_NAME: &str = "Dockerfile";

/// Registry with every Dockerfile check.
pub fn registry(settings: &Settings) -> CheckRegistry<DockerfileContext> {
    let docker = DockerCli::from_settings(settings);
    let mut registry = CheckRegistry::new().with_priority(&[
        "file-validation",
        "docker-availability",
        "build-validation",
        "runtime-validation",
    ]);
    registry.register(Box::new(checks::FileValidationCheck));
    registry.register(Box::new(checks::DockerAvailabilityCheck::new(docker.clone())));
    registry.register(Box::new(checks::BuildCheck::new(
        docker.clone(),
        settings.docker.tag_prefix.clone(),
    )));
    registry.register(Box::new(checks::RuntimeCheck::new(docker)));
    registry
}

/// Build and run options from the command line.
#[derive(Debug, Clone, Default)]
pub struct DockerOptions {
    /// `--tag`
    pub tag: Option<String>,
    /// `--cmd`
    pub command: Option<String>,
    /// `--no-cleanup`
    pub no_cleanup: bool,
    /// `--no-build`
    pub no_build: bool,
}

/// Resolve a file or module directory to the Dockerfile to validate.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else if path.is_dir() {
        let candidate = path.join(FILE_NAME);
        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(LintError::NoConventionalFile {
                name: FILE_NAME,
                dir: path.to_path_buf(),
            })
        }
    } else {
        Err(LintError::TargetNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Resolve `path`, then lint, build and optionally run the image.
pub fn validate(
    path: &Path,
    options: &DockerOptions,
    settings: &Settings,
    observer: &mut dyn PipelineObserver,
) -> Result<Validation> {
    let file = resolve_target(path)?;
    tracing::info!("Running checks on Dockerfile: {}", file.display());

    let mut ctx = DockerfileContext {
        tag: options.tag.clone(),
        command: options.command.clone(),
        cleanup: settings.docker.cleanup && !options.no_cleanup,
        build: !options.no_build,
        ..Default::default()
    };
    let target = Target::File(file);
    let result = run_pipeline_with(&registry(settings), &target, &mut ctx, observer);
    Ok(Validation { target, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::NoopObserver;
    use std::fs;
    use tempfile::TempDir;

    fn offline_settings() -> Settings {
        let mut settings = Settings::default();
        settings.tools.docker = "gplint-no-such-docker".to_string();
        settings
    }

    #[test]
    fn checks_run_in_pipeline_order() {
        let ids: Vec<_> = registry(&Settings::default())
            .ordered()
            .iter()
            .map(|c| c.id().as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "file-validation",
                "docker-availability",
                "build-validation",
                "runtime-validation",
            ]
        );
    }

    #[test]
    fn directory_resolves_to_dockerfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM alpine\n").unwrap();
        assert_eq!(
            resolve_target(temp.path()).unwrap(),
            temp.path().join("Dockerfile")
        );
    }

    #[test]
    fn directory_without_dockerfile() {
        let temp = TempDir::new().unwrap();
        let err = resolve_target(temp.path()).unwrap_err();
        assert!(err.to_string().starts_with("No Dockerfile found in directory"));
    }

    #[test]
    fn missing_docker_fails_availability_and_build() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM alpine\n").unwrap();

        let validation = validate(
            temp.path(),
            &DockerOptions::default(),
            &offline_settings(),
            &mut NoopObserver,
        )
        .unwrap();
        let checks: Vec<_> = validation
            .result
            .findings
            .iter()
            .filter(|f| f.issue.is_error())
            .map(|f| f.check.as_str())
            .collect();
        assert_eq!(checks, vec!["docker-availability", "build-validation"]);
    }

    #[test]
    fn no_build_skips_build_and_runtime() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM alpine\n").unwrap();

        let options = DockerOptions {
            command: Some("true".into()),
            no_build: true,
            ..Default::default()
        };
        let validation =
            validate(temp.path(), &options, &offline_settings(), &mut NoopObserver).unwrap();
        let skipped: Vec<_> = validation
            .result
            .issues()
            .filter(|i| i.message.contains("skipped"))
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(
            skipped,
            vec![
                "Build validation skipped - image build disabled",
                "Runtime testing skipped - image build disabled",
            ]
        );
    }
}
