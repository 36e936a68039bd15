//! Built-in wrapper script checks.

pub mod documentation;
pub mod error_handling;
pub mod file_validation;
pub mod input_validation;
pub mod output;
pub mod parameters;
pub mod security;
pub mod structure;
pub mod syntax;

pub use documentation::DocumentationCheck;
pub use error_handling::ErrorHandlingCheck;
pub use file_validation::FileValidationCheck;
pub use input_validation::InputValidationCheck;
pub use output::OutputGenerationCheck;
pub use parameters::{parameter_references, ParameterCheck};
pub use security::SecurityCheck;
pub use structure::CommandStructureCheck;
pub use syntax::SyntaxCheck;
