//! Manifest validation.
//!
//! A module manifest is a `key=value` properties file describing the
//! module: its LSID, name, command line, container image and parameters
//! (`p<N>_<attribute>`). Issues are reported with the offending line.
//!
//! # Example
//!
//! ```
//! use gplint::lint::{run_pipeline, Target};
//! use gplint::manifest::{registry, ManifestContext, ManifestDocument};
//!
//! let text = "LSID=urn:lsid:broad.mit.edu:cancer.software.genepattern.module.analysis:00123:1\n\
//!             name=Kallisto\n\
//!             commandLine=<wrapper.py> <input.file>\n";
//! let mut ctx = ManifestContext::with_document(ManifestDocument::parse(text));
//! let result = run_pipeline(&registry(), &Target::File("manifest".into()), &mut ctx);
//! assert!(result.passed);
//! ```

pub mod checks;
pub mod context;
pub mod document;

use std::path::{Path, PathBuf};

use crate::error::{LintError, Result};
use crate::lint::{run_pipeline_with, CheckRegistry, PipelineObserver, Target, Validation};

pub use context::ManifestContext;
pub use document::{Entry, ManifestDocument};

/// Format identifier.
pub const FORMAT: &str = "manifest";

/// Noun used in reports.
pub const NOUN: &str = "Manifest";

/// Conventional file name inside a module directory.
pub const FILE_NAME: &str = "manifest";

/// Registry with every manifest check.
pub fn registry() -> CheckRegistry<ManifestContext> {
    let mut registry = CheckRegistry::new().with_priority(&["file-name"]);
    registry.register(Box::new(checks::FileNameCheck));
    registry.register(Box::new(checks::BasicKeyValueCheck));
    registry.register(Box::new(checks::DuplicateKeysCheck));
    registry.register(Box::new(checks::RequiredKeysCheck));
    registry.register(Box::new(checks::LsidFormatCheck));
    registry.register(Box::new(checks::CommandLineCheck));
    registry.register(Box::new(checks::ModuleNameCheck));
    registry.register(Box::new(checks::DockerImageCheck));
    registry.register(Box::new(checks::EmptyFieldCheck::author()));
    registry.register(Box::new(checks::EmptyFieldCheck::description()));
    registry.register(Box::new(checks::EmptyFieldCheck::version()));
    registry.register(Box::new(checks::AllowedValuesCheck::cpu_type()));
    registry.register(Box::new(checks::AllowedValuesCheck::os()));
    registry.register(Box::new(checks::AllowedValuesCheck::privacy()));
    registry.register(Box::new(checks::AllowedValuesCheck::quality()));
    registry.register(Box::new(checks::FieldFormatCheck::jvm_level()));
    registry.register(Box::new(checks::FieldFormatCheck::memory()));
    registry.register(Box::new(checks::FieldFormatCheck::urls()));
    registry.register(Box::new(checks::FileFormatCheck));
    registry.register(Box::new(checks::ParameterAttributesCheck));
    registry.register(Box::new(checks::ParameterNumberingCheck));
    registry
}

/// Resolve a file or module directory to the manifest to validate.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else if path.is_dir() {
        let candidate = path.join(FILE_NAME);
        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(LintError::NoConventionalFile {
                name: "manifest file",
                dir: path.to_path_buf(),
            })
        }
    } else {
        Err(LintError::TargetNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Resolve `path` and validate the manifest it names.
pub fn validate(path: &Path, observer: &mut dyn PipelineObserver) -> Result<Validation> {
    let manifest = resolve_target(path)?;
    tracing::info!("Running checks on manifest: {}", manifest.display());

    let mut ctx = match ManifestDocument::read(&manifest) {
        Ok(document) => ManifestContext::with_document(document),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", manifest.display(), e);
            ManifestContext::default()
        }
    };

    let target = Target::File(manifest);
    let result = run_pipeline_with(&registry(), &target, &mut ctx, observer);
    Ok(Validation { target, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::NoopObserver;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_name_runs_first() {
        let registry = registry();
        let ordered = registry.ordered();
        assert_eq!(ordered[0].id().as_str(), "file-name");
        assert_eq!(ordered[1].id().as_str(), "author-field");
    }

    #[test]
    fn resolves_directory_to_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("manifest"), "name=Foo\n").unwrap();
        assert_eq!(
            resolve_target(temp.path()).unwrap(),
            temp.path().join("manifest")
        );
    }

    #[test]
    fn directory_without_manifest() {
        let temp = TempDir::new().unwrap();
        let err = resolve_target(temp.path()).unwrap_err();
        assert!(err.to_string().starts_with("No manifest file found in directory"));
    }

    #[test]
    fn missing_path() {
        let err = resolve_target(Path::new("/definitely/not/here")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File or directory does not exist: '/definitely/not/here'"
        );
    }

    #[test]
    fn misnamed_manifest_fails_with_file_name_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("module.properties");
        fs::write(
            &path,
            "LSID=urn:lsid:a.b:c.d:1:1\nname=Foo\ncommandLine=<run> <x>\njob.docker.image=a/b\\:1\n",
        )
        .unwrap();

        let validation = validate(&path, &mut NoopObserver).unwrap();
        assert!(!validation.result.passed);
        assert_eq!(validation.result.error_count(), 1);
        assert_eq!(validation.result.findings[0].check.as_str(), "file-name");
    }
}
