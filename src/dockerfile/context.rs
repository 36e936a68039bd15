/// Context threaded through the Dockerfile checks.
#[derive(Debug, Clone)]
pub struct DockerfileContext {
    /// Image tag to build (`--tag`); generated when absent.
    pub tag: Option<String>,
    /// Command to run in the built image (`--cmd`).
    pub command: Option<String>,
    /// Remove the built image afterwards.
    pub cleanup: bool,
    /// Whether to build at all (`--no-build` clears it).
    pub build: bool,
    /// Set by the availability probe.
    pub docker_available: Option<bool>,
    /// Set by the build check.
    pub build_success: Option<bool>,
    /// Tag of the successfully built image.
    pub built_tag: Option<String>,
}

impl Default for DockerfileContext {
    fn default() -> Self {
        Self {
            tag: None,
            command: None,
            cleanup: true,
            build: true,
            docker_available: None,
            build_success: None,
            built_tag: None,
        }
    }
}

/// Keep at most `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
