//! Shared state for documentation checks.

use std::fmt;

/// Documentation formats text can be extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Html,
    Markdown,
    Pdf,
    Text,
}

impl DocFormat {
    /// Detect the format from a path or URL suffix; unknown suffixes are text.
    pub fn detect(path_or_url: &str) -> Self {
        let lower = path_or_url.to_lowercase();
        if lower.ends_with(".html") || lower.ends_with(".htm") {
            DocFormat::Html
        } else if lower.ends_with(".md") || lower.ends_with(".markdown") {
            DocFormat::Markdown
        } else if lower.ends_with(".pdf") {
            DocFormat::Pdf
        } else {
            DocFormat::Text
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocFormat::Html => "HTML",
            DocFormat::Markdown => "MARKDOWN",
            DocFormat::Pdf => "PDF",
            DocFormat::Text => "TXT",
        })
    }
}

/// Context threaded through the documentation checks.
#[derive(Debug, Clone, Default)]
pub struct DocumentationContext {
    /// Module the documentation should mention (`--module`).
    pub expected_module: Option<String>,
    /// Parameters the documentation should mention (`--parameters`).
    pub expected_parameters: Option<Vec<String>>,
    /// Detected format, set by content retrieval.
    pub format: Option<DocFormat>,
    /// Plain text of the document, set by content retrieval.
    pub content: Option<String>,
}

/// Whether `input` names an `http(s)://` resource rather than a local file.
pub fn is_url(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_by_suffix() {
        assert_eq!(DocFormat::detect("README.MD"), DocFormat::Markdown);
        assert_eq!(DocFormat::detect("https://x.org/doc.htm"), DocFormat::Html);
        assert_eq!(DocFormat::detect("guide.pdf"), DocFormat::Pdf);
        assert_eq!(DocFormat::detect("notes"), DocFormat::Text);
    }

    #[test]
    fn recognises_urls() {
        assert!(is_url("HTTPS://example.org/doc"));
        assert!(!is_url("ftp://example.org/doc"));
        assert!(!is_url("docs/index.html"));
    }
}
