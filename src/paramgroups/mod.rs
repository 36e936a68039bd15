//! Parameter group validation.
//!
//! `paramgroups.json` arranges a module's parameters into named, optionally
//! hidden sections of the job submission form. Checks cover the JSON shape,
//! the groups themselves and, with `--parameters`, agreement with the
//! module's declared parameters.

pub mod checks;
pub mod context;

use std::path::{Path, PathBuf};

use crate::error::{LintError, Result};
use crate::lint::{run_pipeline_with, CheckRegistry, PipelineObserver, Target, Validation};

pub use context::ParamgroupsContext;

/// Format identifier.
pub const FORMAT: &str = "paramgroups";

/// Noun used in reports.
pub const NOUN: &str = "Paramgroups file";

/// Conventional file name inside a module directory.
pub const FILE_NAME: &str = "paramgroups.json";

/// Registry with every paramgroups check, in identifier order.
pub fn registry() -> CheckRegistry<ParamgroupsContext> {
    let mut registry = CheckRegistry::new();
    registry.register(Box::new(checks::FileValidationCheck));
    registry.register(Box::new(checks::GroupCheck));
    registry.register(Box::new(checks::CompletenessCheck));
    registry.register(Box::new(checks::CoverageCheck));
    registry.register(Box::new(checks::ParameterNamesCheck));
    registry.register(Box::new(checks::StructureCheck));
    registry
}

/// Resolve a file or module directory to the paramgroups file to validate.
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

/// Resolve `path` and validate it against the optional expected parameters.
pub fn validate(
    path: &Path,
    expected_parameters: Option<Vec<String>>,
    observer: &mut dyn PipelineObserver,
) -> Result<Validation> {
    let file = resolve_target(path)?;
    tracing::info!("Running checks on paramgroups file: {}", file.display());

    let mut ctx = ParamgroupsContext {
        expected_parameters,
        ..Default::default()
    };
    let target = Target::File(file);
    let result = run_pipeline_with(&registry(), &target, &mut ctx, observer);
    Ok(Validation { target, result })
}
