//! Generic validation engine.
//!
//! Every artifact format is validated the same way: a set of independent
//! checks is collected in a registry, ordered, and run one after another
//! against a target while sharing one mutable, format-specific context.
//!
//! # Overview
//!
//! - **Checks** - Individual validations ([`Check`] trait)
//! - **Registry** - The checks of one format and their order ([`CheckRegistry`])
//! - **Pipeline** - Runs the checks and aggregates issues ([`run_pipeline`])
//! - **Issues** - Findings with a severity ([`Issue`])
//! - **Output** - Text and JSON rendering ([`output`])
//!
//! # Example
//!
//! ```
//! use gplint::lint::{run_pipeline, CheckRegistry, Severity, Target};
//!
//! // A format with no checks passes with a single warning.
//! let registry: CheckRegistry<()> = CheckRegistry::new();
//! let result = run_pipeline(&registry, &Target::File("artifact".into()), &mut ());
//! assert!(result.passed);
//! assert_eq!(result.findings[0].issue.severity, Severity::Warning);
//! ```

pub mod check;
pub mod issue;
pub mod output;
pub mod pattern;
pub mod pipeline;
pub mod registry;

pub use check::{Check, CheckId, Target};
pub use issue::{Issue, Severity};
pub use output::{IssueStyle, JsonFormatter, OutputFormat, Report, ReportFormatter, TextFormatter};
pub use pipeline::{
    run_pipeline, run_pipeline_with, Finding, NoopObserver, PipelineObserver, PipelineResult,
    Validation,
};
pub use registry::CheckRegistry;

/// Defines a lazily compiled static regex.
///
/// Patterns are literals; an invalid one panics on first use.
macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: std::sync::LazyLock<regex::Regex> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).unwrap());
    };
}

pub(crate) use lazy_regex;
