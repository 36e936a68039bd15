//! Settings schema.
//!
//! Every field has a default, so an empty or partial `.gplint.yml` is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root settings structure for `.gplint.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Timeouts for network calls and subprocesses.
    pub timeouts: Timeouts,

    /// Docker build and run behaviour.
    pub docker: DockerSettings,

    /// External programs used by checks.
    pub tools: Tools,
}

/// Timeouts, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    /// `HEAD` probes of file-parameter URLs.
    pub url_check_secs: u64,
    /// Documentation downloads.
    pub url_fetch_secs: u64,
    /// Script syntax checkers.
    pub syntax_check_secs: u64,
    /// `docker build`.
    pub docker_build_secs: u64,
    /// `docker run` and the availability probe.
    pub docker_run_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            url_check_secs: 5,
            url_fetch_secs: 30,
            syntax_check_secs: 10,
            docker_build_secs: 1800,
            docker_run_secs: 600,
        }
    }
}

impl Timeouts {
    pub fn url_check(&self) -> Duration {
        Duration::from_secs(self.url_check_secs)
    }

    pub fn url_fetch(&self) -> Duration {
        Duration::from_secs(self.url_fetch_secs)
    }

    pub fn syntax_check(&self) -> Duration {
        Duration::from_secs(self.syntax_check_secs)
    }

    pub fn docker_build(&self) -> Duration {
        Duration::from_secs(self.docker_build_secs)
    }

    pub fn docker_run(&self) -> Duration {
        Duration::from_secs(self.docker_run_secs)
    }
}

/// Docker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerSettings {
    /// Repository prefix for generated image tags.
    pub tag_prefix: String,
    /// Remove built images after validation.
    pub cleanup: bool,
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            tag_prefix: "gpmod".to_string(),
            cleanup: true,
        }
    }
}

/// Program names or paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    pub python: String,
    pub bash: String,
    pub rscript: String,
    pub docker: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            bash: "bash".to_string(),
            rscript: "Rscript".to_string(),
            docker: "docker".to_string(),
        }
    }
}
