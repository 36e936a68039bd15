//! Error types for gplint operations.
//!
//! This module defines [`LintError`], the error type for everything that
//! happens *around* a validation pipeline: resolving targets, loading
//! settings, spawning tools and talking to the network.
//!
//! # Error Handling Strategy
//!
//! - Problems found *in* an artifact are never errors; checks report them as
//!   [`Issue`](crate::lint::Issue)s.
//! - Use `LintError` for resolution and infrastructure failures that stop a
//!   pipeline from starting. Their `Display` text is printed verbatim after
//!   `ERROR: `.
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gplint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// A file-or-directory target does not exist.
    #[error("File or directory does not exist: '{}'", path.display())]
    TargetNotFound { path: PathBuf },

    /// A file-only target does not exist.
    #[error("File does not exist: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// A directory target lacks the file the format expects in it.
    #[error("No {name} found in directory '{}'", dir.display())]
    NoConventionalFile { name: &'static str, dir: PathBuf },

    /// A GPUnit file target without the `.yml` extension.
    #[error("File '{}' is not a .yml file", path.display())]
    NotYamlFile { path: PathBuf },

    /// A GPUnit directory target without any `.yml` files.
    #[error("No .yml files found in directory '{}'", path.display())]
    NoMatchingFiles { path: PathBuf },

    /// A combination of command-line arguments that cannot be honoured.
    #[error("{message}")]
    InvalidArguments { message: String },

    /// Settings file not found at the given location.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// An external program could not be started because it is not installed.
    #[error("Program not found: {program}")]
    ToolNotFound { program: String },

    /// A subprocess could not be started or waited on.
    #[error("Command failed to start: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gplint operations.
pub type Result<T> = std::result::Result<T, LintError>;
