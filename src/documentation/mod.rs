//! Module documentation validation.
//!
//! Documentation may be a local file or an `http(s)://` URL in HTML,
//! Markdown, PDF or plain text. Its text is searched for the module name
//! and parameter names given on the command line.

pub mod checks;
pub mod context;
pub mod extract;

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{LintError, Result};
use crate::lint::{run_pipeline_with, CheckRegistry, PipelineObserver, Target, Validation};

pub use context::{is_url, DocFormat, DocumentationContext};

/// Format identifier.
pub const FORMAT: &str = "documentation";

/// Noun used in reports.
pub const NOUN: &str = "Documentation";

/// Registry with every documentation check, in identifier order.
pub fn registry(settings: &Settings) -> CheckRegistry<DocumentationContext> {
    let mut registry = CheckRegistry::new();
    registry.register(Box::new(checks::ContentRetrievalCheck::new(
        settings.timeouts.url_fetch(),
    )));
    registry.register(Box::new(checks::ModuleMentionCheck));
    registry.register(Box::new(checks::ParameterMentionCheck));
    registry
}

/// Turn a command-line argument into a target. Local files must exist.
pub fn resolve_target(input: &str) -> Result<Target> {
    if is_url(input) {
        return Ok(Target::Url(input.to_string()));
    }
    let path = PathBuf::from(input);
    if !path.exists() {
        return Err(LintError::FileNotFound { path });
    }
    Ok(Target::File(path))
}

/// Validate documentation at `input` against the optional expectations.
pub fn validate(
    input: &str,
    expected_module: Option<String>,
    expected_parameters: Option<Vec<String>>,
    settings: &Settings,
    observer: &mut dyn PipelineObserver,
) -> Result<Validation> {
    let target = resolve_target(input)?;
    tracing::info!("Running checks on documentation: {}", target);

    let mut ctx = DocumentationContext {
        expected_module,
        expected_parameters,
        ..Default::default()
    };
    let result = run_pipeline_with(&registry(settings), &target, &mut ctx, observer);
    Ok(Validation { target, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::NoopObserver;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn runs_in_identifier_order() {
        let ids: Vec<_> = registry(&Settings::default())
            .ordered()
            .iter()
            .map(|c| c.id().as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["content-retrieval", "module-validation", "parameter-validation"]
        );
    }

    #[test]
    fn missing_local_file_is_rejected_early() {
        let err = resolve_target("/no/such/README.md").unwrap_err();
        assert_eq!(err.to_string(), "File does not exist: '/no/such/README.md'");
    }

    #[test]
    fn urls_are_not_checked_locally() {
        assert!(matches!(
            resolve_target("https://example.org/doc.html").unwrap(),
            Target::Url(_)
        ));
    }

    #[test]
    fn documented_module_passes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "# Kallisto\n\nRun with `--index` and `reads.file`.\n").unwrap();

        let validation = validate(
            path.to_str().unwrap(),
            Some("Kallisto".into()),
            Some(vec!["index".into(), "reads.file".into()]),
            &Settings::default(),
            &mut NoopObserver,
        )
        .unwrap();
        assert!(validation.result.passed);
        assert_eq!(validation.result.error_count(), 0);
    }

    #[test]
    fn undocumented_parameter_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.txt");
        fs::write(&path, "Kallisto quantifies transcripts.\n").unwrap();

        let validation = validate(
            path.to_str().unwrap(),
            None,
            Some(vec!["threads".into()]),
            &Settings::default(),
            &mut NoopObserver,
        )
        .unwrap();
        assert!(!validation.result.passed);
        assert_eq!(validation.result.error_count(), 1);
    }
}
