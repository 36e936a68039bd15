use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::documentation::extract::{html_to_text, looks_like_pdf, pdf_to_text};
use crate::documentation::{DocFormat, DocumentationContext};
use crate::fetch::HttpFetcher;
use crate::lint::{Check, CheckId, Issue, Target};

/// Loads the document and stores its plain text for later checks.
pub struct ContentRetrievalCheck {
    fetch_timeout: Duration,
}

impl ContentRetrievalCheck {
    pub fn new(fetch_timeout: Duration) -> Self {
        Self { fetch_timeout }
    }
}

struct Raw {
    bytes: Vec<u8>,
    declared_pdf: bool,
}

impl Check<DocumentationContext> for ContentRetrievalCheck {
    fn id(&self) -> CheckId {
        CheckId::new("content-retrieval")
    }

    fn name(&self) -> &str {
        "Content Retrieval"
    }

    fn description(&self) -> &str {
        "Retrieves the documentation and extracts its text"
    }

    fn run(&self, target: &Target, ctx: &mut DocumentationContext) -> anyhow::Result<Vec<Issue>> {
        let mut format = DocFormat::detect(&target.to_string());

        let raw = match target {
            Target::Url(url) => {
                let fetcher = HttpFetcher::with_timeout(self.fetch_timeout)?;
                match fetcher.get(url) {
                    Ok(response) => Raw {
                        declared_pdf: response.is_pdf(),
                        bytes: response.body,
                    },
                    Err(e) => return Ok(vec![retrieval_failed(e)]),
                }
            }
            Target::File(path) => {
                if !path.exists() {
                    return Ok(vec![Issue::error(format!(
                        "Documentation file does not exist: {}",
                        path.display()
                    ))]);
                }
                match read_file(path) {
                    Ok(bytes) => Raw {
                        bytes,
                        declared_pdf: false,
                    },
                    Err(message) => return Ok(vec![retrieval_failed(message)]),
                }
            }
        };

        if raw.bytes.is_empty() {
            return Ok(vec![Issue::error("Documentation is empty")]);
        }
        if raw.declared_pdf || looks_like_pdf(&raw.bytes) {
            format = DocFormat::Pdf;
        }
        ctx.format = Some(format);

        let mut issues = Vec::new();
        let text = match format {
            DocFormat::Html => html_to_text(&String::from_utf8_lossy(&raw.bytes)),
            DocFormat::Pdf => {
                issues.push(
                    Issue::warning("PDF text extraction is limited to uncompressed text objects")
                        .with_context("Some documented names may not be found"),
                );
                pdf_to_text(&raw.bytes)
            }
            DocFormat::Markdown | DocFormat::Text => {
                String::from_utf8_lossy(&raw.bytes).into_owned()
            }
        };

        if text.trim().is_empty() {
            issues.push(
                Issue::warning(format!("No text content extracted from {} document", format))
                    .with_context("Document may be empty or format not supported"),
            );
        } else {
            issues.push(Issue::info(format!(
                "Successfully retrieved {} characters from {} document",
                text.chars().count(),
                format
            )));
        }
        ctx.content = Some(text);
        Ok(issues)
    }
}

fn retrieval_failed(error: impl std::fmt::Display) -> Issue {
    Issue::error(format!("Failed to retrieve documentation: {}", error))
}

fn read_file(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
        std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", path.display()),
        _ => format!("Failed to read file: {}", e),
    })
}
