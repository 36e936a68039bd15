//! gplint - Validation pipelines for GenePattern module artifacts.
//!
//! A GenePattern module ships a manifest, GPUnit tests, parameter groups,
//! a Dockerfile, documentation and a wrapper script. gplint validates each
//! of them with a pipeline of independent checks that share a typed
//! context, and reports a PASS/FAIL verdict with every issue found.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading (`.gplint.yml`)
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Blocking HTTP client for URL probes and downloads
//! - [`lint`] - The check engine: issues, registry, pipeline and reports
//! - [`shell`] - Subprocess execution with timeouts
//! - [`ui`] - Report stream and progress spinners
//! - [`manifest`], [`gpunit`], [`paramgroups`], [`dockerfile`],
//!   [`documentation`], [`wrapper`] - One module per artifact format
//!
//! # Example
//!
//! ```
//! use gplint::lint::NoopObserver;
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(
//!     dir.path().join("paramgroups.json"),
//!     r#"[{"name": "Inputs", "parameters": ["input.file"]}]"#,
//! )
//! .unwrap();
//!
//! let validation = gplint::paramgroups::validate(dir.path(), None, &mut NoopObserver).unwrap();
//! assert!(validation.result.passed);
//! ```

pub mod cli;
pub mod config;
pub mod dockerfile;
pub mod documentation;
pub mod error;
pub mod fetch;
pub mod gpunit;
pub mod lint;
pub mod manifest;
pub mod paramgroups;
pub mod shell;
pub mod ui;
pub mod wrapper;

pub use error::{LintError, Result};
pub use lint::{Issue, PipelineResult, Severity, Validation};
