//! Built-in paramgroups checks.

pub mod coverage;
pub mod file_validation;
pub mod groups;
pub mod names;
pub mod structure;

pub use coverage::{CompletenessCheck, CoverageCheck};
pub use file_validation::FileValidationCheck;
pub use groups::GroupCheck;
pub use names::ParameterNamesCheck;
pub use structure::StructureCheck;

#[cfg(test)]
pub(crate) fn run_on(
    check: &dyn crate::lint::Check<super::ParamgroupsContext>,
    json: &str,
) -> Vec<crate::lint::Issue> {
    let mut ctx = super::ParamgroupsContext {
        parsed: Some(serde_json::from_str(json).unwrap()),
        ..Default::default()
    };
    let target = crate::lint::Target::File(std::path::PathBuf::from("paramgroups.json"));
    check.run(&target, &mut ctx).unwrap()
}
