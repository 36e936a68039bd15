//! Built-in manifest checks.

pub mod basic_key_value;
pub mod command_line;
pub mod docker_image;
pub mod duplicate_keys;
pub mod fields;
pub mod file_format;
pub mod file_name;
pub mod lsid_format;
pub mod module_name;
pub mod parameters;
pub mod required_keys;

pub use basic_key_value::BasicKeyValueCheck;
pub use command_line::CommandLineCheck;
pub use docker_image::DockerImageCheck;
pub use duplicate_keys::DuplicateKeysCheck;
pub use fields::{AllowedValuesCheck, EmptyFieldCheck, FieldFormatCheck};
pub use file_format::FileFormatCheck;
pub use file_name::FileNameCheck;
pub use lsid_format::LsidFormatCheck;
pub use module_name::ModuleNameCheck;
pub use parameters::{ParameterAttributesCheck, ParameterNumberingCheck};
pub use required_keys::RequiredKeysCheck;

/// Render items as `[a, b, c]`.
pub(crate) fn bracket_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = items.into_iter().collect();
    let joined = parts
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
pub(crate) fn run_on(
    check: &dyn crate::lint::Check<super::ManifestContext>,
    text: &str,
) -> Vec<crate::lint::Issue> {
    let mut ctx = super::ManifestContext::with_document(super::ManifestDocument::parse(text));
    let target = crate::lint::Target::File(std::path::PathBuf::from("manifest"));
    check.run(&target, &mut ctx).unwrap()
}
