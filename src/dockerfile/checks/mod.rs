//! Built-in Dockerfile checks.

pub mod availability;
pub mod build;
pub mod file_validation;
pub mod runtime;

pub use availability::DockerAvailabilityCheck;
pub use build::{default_tag, BuildCheck};
pub use file_validation::FileValidationCheck;
pub use runtime::RuntimeCheck;

/// A `docker` stand-in: an executable shell script with `body`.
#[cfg(all(test, unix))]
pub(crate) fn fake_docker(dir: &tempfile::TempDir, body: &str) -> super::DockerCli {
    use std::os::unix::fs::PermissionsExt;
    use std::time::Duration;

    let path = dir.path().join("fake-docker");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    super::DockerCli::new(
        path.to_string_lossy().into_owned(),
        Duration::from_secs(10),
        Duration::from_secs(10),
    )
}
