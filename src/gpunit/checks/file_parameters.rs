//! Existence of files referenced by file-typed parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::HttpFetcher;
use crate::gpunit::context::display_value;
use crate::gpunit::{GpunitContext, ParamType};
use crate::lint::{Check, CheckId, Issue, Target};

const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];
const FTP_SCHEME: &str = "ftp://";

/// Verifies every `file` parameter names a reachable URL or an existing file.
///
/// Relative paths resolve against the directory holding the GPUnit file.
pub struct FileParameterCheck {
    url_timeout: Duration,
}

impl FileParameterCheck {
    pub fn new(url_timeout: Duration) -> Self {
        Self { url_timeout }
    }
}

impl Check<GpunitContext> for FileParameterCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-parameter-exist")
    }

    fn name(&self) -> &str {
        "File Parameter Existence"
    }

    fn description(&self) -> &str {
        "Validates file parameters point to existing files or reachable URLs"
    }

    fn run(&self, target: &Target, ctx: &mut GpunitContext) -> anyhow::Result<Vec<Issue>> {
        let Some(types) = ctx.expected_param_types.as_ref().filter(|t| !t.is_empty()) else {
            return Ok(vec![Issue::info(
                "File existence validation skipped - no type information provided",
            )
            .with_context("Use --parameters with --types to enable file existence validation")]);
        };
        if ctx.parsed.is_none() {
            return Ok(vec![Issue::error("Cannot validate parameters: YAML parsing failed")
                .with_context("File validation must pass before file existence validation")]);
        }
        let Some(params) = ctx.params() else {
            return Ok(Vec::new());
        };

        let base_dir = target
            .path()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut fetcher: Option<HttpFetcher> = None;
        let mut issues = Vec::new();

        for (key, value) in params {
            let name = display_value(key);
            if types.get(&name) != Some(&ParamType::File) {
                continue;
            }
            let Some(value) = value.as_str().filter(|v| !v.is_empty()) else {
                continue;
            };

            if value.starts_with(FTP_SCHEME) {
                issues.push(
                    Issue::warning(format!(
                        "File parameter '{}' uses an FTP URL that cannot be checked",
                        name
                    ))
                    .with_context(format!("Value: {}", value)),
                );
            } else if HTTP_SCHEMES.iter().any(|scheme| value.starts_with(scheme)) {
                if fetcher.is_none() {
                    fetcher = Some(HttpFetcher::with_timeout(self.url_timeout)?);
                }
                if let Some(error) = fetcher.as_ref().and_then(|f| probe_url(f, value)) {
                    issues.push(
                        Issue::error(format!("File parameter '{}' points to inaccessible URL", name))
                            .with_context(format!("{} (Value: {})", error, value)),
                    );
                }
            } else if let Some(context) = missing_file(&base_dir, value) {
                issues.push(
                    Issue::error(format!("File parameter '{}' points to missing file", name))
                        .with_context(context),
                );
            }
        }
        Ok(issues)
    }
}

fn probe_url(fetcher: &HttpFetcher, url: &str) -> Option<String> {
    match fetcher.head(url) {
        Ok(200) => None,
        Ok(status) => Some(format!("URL returned status: {}", status)),
        Err(e) => Some(format!("URL inaccessible: {}", e)),
    }
}

fn missing_file(base_dir: &Path, value: &str) -> Option<String> {
    let path = Path::new(value);
    if path.is_absolute() {
        (!path.is_file()).then(|| format!("Absolute path not found: {}", value))
    } else {
        let full: PathBuf = base_dir.join(path);
        (!full.is_file()).then(|| format!("File not found at: {}", full.display()))
    }
}
