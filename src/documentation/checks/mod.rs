//! Built-in documentation checks.

pub mod content;
pub mod mentions;

pub use content::ContentRetrievalCheck;
pub use mentions::{module_mentions, parameter_mentions, ModuleMentionCheck, ParameterMentionCheck};
