//! Wrapper script validation.
//!
//! A wrapper script adapts a module's command line to the tool it runs.
//! After the file is read and its language detected (extension, then
//! shebang, then content), syntax is checked with the language's own tool
//! and a set of heuristics scores structure, documentation, error
//! handling, input validation, output generation and security. Only
//! missing files, syntax errors and unreferenced parameters fail a script;
//! the heuristics warn.

pub mod checks;
pub mod context;
pub(crate) mod heuristics;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{LintError, Result};
use crate::lint::{run_pipeline_with, CheckRegistry, PipelineObserver, Target, Validation};

pub use context::{ScriptType, WrapperContext};

/// Format identifier.
pub const FORMAT: &str = "wrapper";

/// Noun used in reports.
pub const NOUN: &str = "Wrapper script";

/// Registry with every wrapper check; file and syntax validation run first.
pub fn registry(settings: &Settings) -> CheckRegistry<WrapperContext> {
    let mut registry =
        CheckRegistry::new().with_priority(&["file-validation", "syntax-validation"]);
    registry.register(Box::new(checks::FileValidationCheck));
    registry.register(Box::new(checks::SyntaxCheck::new(
        settings.tools.clone(),
        settings.timeouts.syntax_check(),
    )));
    registry.register(Box::new(checks::CommandStructureCheck));
    registry.register(Box::new(checks::DocumentationCheck));
    registry.register(Box::new(checks::ErrorHandlingCheck));
    registry.register(Box::new(checks::InputValidationCheck));
    registry.register(Box::new(checks::OutputGenerationCheck));
    registry.register(Box::new(checks::ParameterCheck));
    registry.register(Box::new(checks::SecurityCheck));
    registry
}

/// The script must exist; any file name is accepted.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(LintError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Validate the script at `path` against the optional expected parameters.
pub fn validate(
    path: &Path,
    expected_parameters: Option<Vec<String>>,
    settings: &Settings,
    observer: &mut dyn PipelineObserver,
) -> Result<Validation> {
    let file = resolve_target(path)?;
    tracing::info!("Running checks on wrapper script: {}", file.display());

    let mut ctx = WrapperContext {
        expected_parameters,
        ..Default::default()
    };
    let target = Target::File(file);
    let result = run_pipeline_with(&registry(settings), &target, &mut ctx, observer);
    Ok(Validation { target, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tools;
    use crate::lint::{NoopObserver, Severity};
    use std::fs;
    use tempfile::TempDir;

    fn offline_settings() -> Settings {
        Settings {
            tools: Tools {
                python: "gplint-missing-python".into(),
                bash: "gplint-missing-bash".into(),
                rscript: "gplint-missing-rscript".into(),
                ..Tools::default()
            },
            ..Settings::default()
        }
    }

    #[test]
    fn file_and_syntax_checks_run_first() {
        let ids: Vec<_> = registry(&Settings::default())
            .ordered()
            .iter()
            .map(|c| c.id().as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "file-validation",
                "syntax-validation",
                "command-structure",
                "documentation",
                "error-handling",
                "input-validation",
                "output-generation",
                "parameter-validation",
                "security",
            ]
        );
    }

    #[test]
    fn missing_script_is_rejected_early() {
        let err = resolve_target(Path::new("/no/such/wrapper.py")).unwrap_err();
        assert_eq!(err.to_string(), "File does not exist: '/no/such/wrapper.py'");
    }

    #[test]
    fn heuristics_never_fail_a_script() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.sh");
        fs::write(&path, "echo hi\n").unwrap();

        let validation = validate(&path, None, &offline_settings(), &mut NoopObserver).unwrap();
        assert!(validation.result.passed);
        assert!(validation.result.warning_count() > 0);
    }

    #[test]
    fn unreferenced_parameter_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.pl");
        fs::write(&path, "#!/usr/bin/perl\nmy $input = shift;\nprint $input;\n").unwrap();

        let validation = validate(
            &path,
            Some(vec!["input".into(), "threads".into()]),
            &offline_settings(),
            &mut NoopObserver,
        )
        .unwrap();
        assert!(!validation.result.passed);
        let errors: Vec<_> = validation
            .result
            .issues()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.clone())
            .collect();
        assert_eq!(errors, vec!["Parameter 'threads' not found in PERL script"]);
    }
}
