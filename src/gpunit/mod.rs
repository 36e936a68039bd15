//! GPUnit test validation.
//!
//! A GPUnit file is a YAML test definition naming the module under test, the
//! parameters of a job and the assertions on its result. A directory target
//! validates every `*.yml` file in it, each with a fresh context.
//!
//! # Example
//!
//! ```
//! use gplint::config::Settings;
//! use gplint::gpunit::{registry, GpunitContext};
//! use gplint::lint::{run_pipeline, Target};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("test.yml");
//! std::fs::write(&path, "name: t\nmodule: Foo\nparams: {a: 1}\nassertions: {jobStatus: success}\n").unwrap();
//!
//! let registry = registry(&Settings::default());
//! let result = run_pipeline(&registry, &Target::File(path), &mut GpunitContext::default());
//! assert!(result.passed);
//! ```

pub mod checks;
pub mod context;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{LintError, Result};
use crate::lint::{run_pipeline_with, CheckRegistry, PipelineObserver, Target, Validation};

pub use context::{GpunitContext, ParamType};

/// Format identifier.
pub const FORMAT: &str = "gpunit";

/// Noun used in reports.
pub const NOUN: &str = "GPUnit file";

const EXTENSION: &str = "yml";

/// Registry with every GPUnit check.
pub fn registry(settings: &Settings) -> CheckRegistry<GpunitContext> {
    let mut registry = CheckRegistry::new().with_priority(&[
        "file-validation",
        "structure-validation",
        "module-validation",
        "parameter-validation",
    ]);
    registry.register(Box::new(checks::FileValidationCheck));
    registry.register(Box::new(checks::StructureCheck));
    registry.register(Box::new(checks::ModuleCheck));
    registry.register(Box::new(checks::ParameterCheck));
    registry.register(Box::new(checks::ParameterTypeCheck));
    registry.register(Box::new(checks::FileParameterCheck::new(
        settings.timeouts.url_check(),
    )));
    registry
}

/// What the caller expects the tests to exercise.
#[derive(Debug, Clone, Default)]
pub struct Expectations {
    pub module: Option<String>,
    pub parameters: Option<Vec<String>>,
    pub types: Option<Vec<ParamType>>,
}

impl Expectations {
    /// Reject `--types` without `--parameters` or with a different count.
    pub fn check(&self) -> Result<()> {
        let Some(types) = &self.types else {
            return Ok(());
        };
        let Some(parameters) = &self.parameters else {
            return Err(LintError::InvalidArguments {
                message: "--types argument requires --parameters argument".to_string(),
            });
        };
        if types.len() != parameters.len() {
            return Err(LintError::InvalidArguments {
                message: format!(
                    "Number of --types ({}) must match number of --parameters ({})",
                    types.len(),
                    parameters.len()
                ),
            });
        }
        Ok(())
    }

    fn context(&self) -> GpunitContext {
        let param_types = match (&self.parameters, &self.types) {
            (Some(parameters), Some(types)) => Some(
                parameters
                    .iter()
                    .cloned()
                    .zip(types.iter().copied())
                    .collect::<BTreeMap<_, _>>(),
            ),
            _ => None,
        };
        GpunitContext {
            expected_module: self.module.clone(),
            expected_parameters: self.parameters.clone(),
            expected_param_types: param_types,
            ..Default::default()
        }
    }
}

/// Resolve a `.yml` file or a directory of them, sorted by path.
pub fn resolve_targets(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
            return Err(LintError::NotYamlFile {
                path: path.to_path_buf(),
            });
        }
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(LintError::TargetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let candidate = entry?.path();
        if candidate.is_file() && candidate.extension().and_then(|e| e.to_str()) == Some(EXTENSION)
        {
            files.push(candidate);
        }
    }
    if files.is_empty() {
        return Err(LintError::NoMatchingFiles {
            path: path.to_path_buf(),
        });
    }
    files.sort();
    Ok(files)
}

/// Validate every GPUnit file `path` resolves to.
pub fn validate(
    path: &Path,
    expectations: &Expectations,
    settings: &Settings,
    observer: &mut dyn PipelineObserver,
) -> Result<Vec<Validation>> {
    expectations.check()?;
    let files = resolve_targets(path)?;
    let registry = registry(settings);

    let mut validations = Vec::with_capacity(files.len());
    for file in files {
        tracing::info!("Running checks on GPUnit file: {}", file.display());
        let mut ctx = expectations.context();
        let target = Target::File(file);
        let result = run_pipeline_with(&registry, &target, &mut ctx, observer);
        validations.push(Validation { target, result });
    }
    Ok(validations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{NoopObserver, Severity};
    use tempfile::TempDir;

    const VALID: &str = "name: t\nmodule: Foo\nparams:\n  input: x\nassertions:\n  jobStatus: success\n";

    #[test]
    fn priority_order() {
        let registry = registry(&Settings::default());
        let ids: Vec<_> = registry
            .ordered()
            .iter()
            .map(|c| c.id().as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "file-validation",
                "structure-validation",
                "module-validation",
                "parameter-validation",
                "file-parameter-exist",
                "parameter-type-validation",
            ]
        );
    }

    #[test]
    fn types_require_parameters() {
        let expectations = Expectations {
            types: Some(vec![ParamType::Text]),
            ..Default::default()
        };
        assert_eq!(
            expectations.check().unwrap_err().to_string(),
            "--types argument requires --parameters argument"
        );
    }

    #[test]
    fn types_must_match_parameter_count() {
        let expectations = Expectations {
            parameters: Some(vec!["a".into(), "b".into()]),
            types: Some(vec![ParamType::Text]),
            ..Default::default()
        };
        assert_eq!(
            expectations.check().unwrap_err().to_string(),
            "Number of --types (1) must match number of --parameters (2)"
        );
    }

    #[test]
    fn single_file_must_be_yml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yaml");
        fs::write(&path, VALID).unwrap();
        let err = resolve_targets(&path).unwrap_err();
        assert!(err.to_string().ends_with("is not a .yml file"));
    }

    #[test]
    fn directory_resolves_sorted_yml_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.yml"), VALID).unwrap();
        fs::write(temp.path().join("a.yml"), VALID).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let files = resolve_targets(temp.path()).unwrap();
        assert_eq!(files, vec![temp.path().join("a.yml"), temp.path().join("b.yml")]);
    }

    #[test]
    fn empty_directory_has_no_matching_files() {
        let temp = TempDir::new().unwrap();
        let err = resolve_targets(temp.path()).unwrap_err();
        assert!(err.to_string().starts_with("No .yml files found in directory"));
    }

    #[test]
    fn valid_file_passes_with_skip_notes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.yml");
        fs::write(&path, VALID).unwrap();

        let validations =
            validate(&path, &Expectations::default(), &Settings::default(), &mut NoopObserver)
                .unwrap();
        assert_eq!(validations.len(), 1);
        let result = &validations[0].result;
        assert!(result.passed);
        assert_eq!(result.info_count(), 4);
        assert!(result
            .issues()
            .any(|i| i.severity == Severity::Info
                && i.message == "Module validation skipped - no expected module provided"));
    }

    #[test]
    fn each_file_gets_a_fresh_context() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.yml"), "name: [broken\n").unwrap();
        fs::write(temp.path().join("b.yml"), VALID).unwrap();

        let validations = validate(
            temp.path(),
            &Expectations::default(),
            &Settings::default(),
            &mut NoopObserver,
        )
        .unwrap();
        assert!(!validations[0].result.passed);
        assert!(validations[1].result.passed);
    }
}
