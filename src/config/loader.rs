//! Settings file discovery and loading.
//!
//! Settings come from, in order of preference:
//! 1. The path given with `--config` (or `GPLINT_CONFIG`)
//! 2. `.gplint.yml` in the working directory
//! 3. Built-in defaults

use crate::config::schema::Settings;
use crate::error::{LintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const SETTINGS_FILE: &str = ".gplint.yml";

/// Find the settings file for `cwd`, if any.
pub fn discover(cwd: &Path) -> Option<PathBuf> {
    let path = cwd.join(SETTINGS_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load settings.
///
/// An explicit path must exist and parse. A discovered file must parse.
/// Without either, defaults are returned.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_file(path),
        None => match discover(cwd) {
            Some(path) => load_settings_file(&path),
            None => {
                tracing::debug!("No {} found, using defaults", SETTINGS_FILE);
                Ok(Settings::default())
            }
        },
    }
}

/// Load and parse a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintError::Io(e)
        }
    })?;

    tracing::debug!("Loading settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| LintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
