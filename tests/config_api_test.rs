//! Integration tests for settings loading.

use gplint::config::{discover, load_settings, Settings, SETTINGS_FILE};
use gplint::LintError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn defaults_without_settings_file() {
    let temp = TempDir::new().unwrap();
    assert!(discover(temp.path()).is_none());
    let settings = load_settings(None, temp.path()).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.timeouts.url_check(), Duration::from_secs(5));
    assert_eq!(settings.timeouts.url_fetch(), Duration::from_secs(30));
    assert_eq!(settings.timeouts.syntax_check(), Duration::from_secs(10));
}

#[test]
fn discovered_file_overrides_some_fields() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(SETTINGS_FILE),
        "timeouts:\n  syntax_check_secs: 3\ntools:\n  rscript: /opt/R/bin/Rscript\n",
    )
    .unwrap();

    let settings = load_settings(None, temp.path()).unwrap();
    assert_eq!(settings.timeouts.syntax_check(), Duration::from_secs(3));
    assert_eq!(settings.timeouts.url_check(), Duration::from_secs(5));
    assert_eq!(settings.tools.rscript, "/opt/R/bin/Rscript");
    assert_eq!(settings.tools.python, "python3");
}

#[test]
fn explicit_path_wins_over_discovery() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(SETTINGS_FILE), "docker:\n  tag_prefix: local\n").unwrap();
    let explicit = temp.path().join("ci.yml");
    fs::write(&explicit, "docker:\n  tag_prefix: ci\n").unwrap();

    let settings = load_settings(Some(&explicit), temp.path()).unwrap();
    assert_eq!(settings.docker.tag_prefix, "ci");
}

#[test]
fn missing_explicit_path_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = load_settings(Some(&temp.path().join("nope.yml")), temp.path()).unwrap_err();
    assert!(matches!(err, LintError::ConfigNotFound { .. }));
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(SETTINGS_FILE), "timeouts: [1, 2\n").unwrap();
    let err = load_settings(None, temp.path()).unwrap_err();
    assert!(matches!(err, LintError::ConfigParseError { .. }));
}
