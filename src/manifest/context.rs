//! Shared state for manifest checks.

use super::document::ManifestDocument;
use crate::lint::Issue;

/// Context threaded through the manifest checks.
#[derive(Debug, Clone, Default)]
pub struct ManifestContext {
    /// Parsed manifest, absent when the file could not be read.
    pub document: Option<ManifestDocument>,
}

impl ManifestContext {
    /// Context seeded with a parsed document.
    pub fn with_document(document: ManifestDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// The document, or the error issue a check should report without it.
    pub fn document(&self, what: &str) -> Result<&ManifestDocument, Issue> {
        self.document.as_ref().ok_or_else(|| {
            Issue::error(format!(
                "Cannot validate {}: manifest content not available",
                what
            ))
        })
    }
}
