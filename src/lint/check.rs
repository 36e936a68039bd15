//! Check definitions.
//!
//! This module provides the core types every validation is built from:
//!
//! - [`Check`] - The trait that all checks implement
//! - [`CheckId`] - Stable kebab-case identifier for a check
//! - [`Target`] - What a pipeline validates (a path or a URL)

use std::fmt;
use std::path::{Path, PathBuf};

use super::issue::Issue;

/// Unique identifier for a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The thing a pipeline validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A local file or directory.
    File(PathBuf),
    /// A remote `http(s)://` resource.
    Url(String),
}

impl Target {
    /// The local path, if this target is not a URL.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Target::File(path) => Some(path),
            Target::Url(_) => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::File(path) => write!(f, "{}", path.display()),
            Target::Url(url) => write!(f, "{}", url),
        }
    }
}

/// A single validation over a target and its format's shared context.
///
/// Anticipated problems are reported as issues. Returning `Err` (or
/// panicking) is reserved for the unexpected; the pipeline turns either into
/// one synthetic error issue and carries on with the next check.
pub trait Check<C>: Send + Sync {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Human-readable name of the check.
    fn name(&self) -> &str;

    /// Description of what this check validates.
    fn description(&self) -> &str;

    /// Validate the target, reading and updating the shared context.
    fn run(&self, target: &Target, ctx: &mut C) -> anyhow::Result<Vec<Issue>>;
}
