//! Line-oriented manifest parsing.
//!
//! A manifest is a Java-properties style file. Blank lines and lines whose
//! first non-space character is `#` or `!` are ignored. A line following one
//! that ends in `\` continues the previous value and is not an entry of its
//! own. Entries split on the first `=`; key and value are trimmed.

use std::fs;
use std::io;
use std::path::Path;

/// A `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number.
    pub line_no: usize,
    pub key: String,
    pub value: String,
    /// The raw line as written.
    pub line: String,
}

/// A statement line: neither blank, a comment, nor a continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub line_no: usize,
    pub line: String,
}

/// Parsed manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDocument {
    statements: Vec<Statement>,
    entries: Vec<Entry>,
}

impl ManifestDocument {
    /// Parse manifest text.
    pub fn parse(content: &str) -> Self {
        let mut statements = Vec::new();
        let mut entries = Vec::new();
        let mut in_continuation = false;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with('!') {
                continue;
            }
            if in_continuation {
                in_continuation = line.trim_end().ends_with('\\');
                continue;
            }

            statements.push(Statement {
                line_no,
                line: line.to_string(),
            });

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.push(Entry {
                line_no,
                key: key.to_string(),
                value: value.trim().to_string(),
                line: line.to_string(),
            });
            in_continuation = line.trim_end().ends_with('\\');
        }

        Self {
            statements,
            entries,
        }
    }

    /// Read and parse a manifest file.
    ///
    /// Manifests are nominally ISO-8859-1; UTF-8 is tried first and bytes
    /// are mapped one-to-one to characters when it does not decode.
    pub fn read(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::parse(&decode_text(bytes)))
    }

    /// All statement lines in file order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// All entries in file order, duplicates included.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The last entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().rev().find(|e| e.key == key)
    }

    /// Whether any entry has `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }
}

/// Decode bytes as UTF-8, falling back to ISO-8859-1.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}
