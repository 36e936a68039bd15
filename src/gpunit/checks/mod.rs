//! Built-in GPUnit checks.

pub mod file_parameters;
pub mod file_validation;
pub mod module;
pub mod parameter_types;
pub mod parameters;
pub mod structure;

pub use file_parameters::FileParameterCheck;
pub use file_validation::FileValidationCheck;
pub use module::ModuleCheck;
pub use parameter_types::ParameterTypeCheck;
pub use parameters::ParameterCheck;
pub use structure::StructureCheck;

#[cfg(test)]
pub(crate) fn run_on(
    check: &dyn crate::lint::Check<super::GpunitContext>,
    yaml: &str,
) -> Vec<crate::lint::Issue> {
    let mut ctx = super::GpunitContext {
        parsed: Some(serde_yaml::from_str(yaml).unwrap()),
        content: Some(yaml.to_string()),
        ..Default::default()
    };
    let target = crate::lint::Target::File(std::path::PathBuf::from("test.yml"));
    check.run(&target, &mut ctx).unwrap()
}
