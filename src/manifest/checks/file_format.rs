//! fileFormat conventions.

use super::bracket_list;
use crate::lint::{Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

/// Validates `fileFormat` and `p<N>_fileFormat` values.
///
/// Extensions are written without a leading dot and separated by `;`.
pub struct FileFormatCheck;

impl Check<ManifestContext> for FileFormatCheck {
    fn id(&self) -> CheckId {
        CheckId::new("file-format")
    }

    fn name(&self) -> &str {
        "File Format"
    }

    fn description(&self) -> &str {
        "Validates file format lists use bare extensions separated by semicolons"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("file formats") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let mut issues = Vec::new();
        let format_entries = doc.entries().iter().filter(|e| {
            (e.key == "fileFormat" || e.key.ends_with("_fileFormat")) && !e.value.is_empty()
        });
        for entry in format_entries {
            let dotted: Vec<&str> = entry
                .value
                .split(';')
                .map(str::trim)
                .filter(|f| f.starts_with('.'))
                .collect();
            if !dotted.is_empty() {
                issues.push(
                    Issue::warning(format!(
                        "File format(s) {} have leading dots. File extensions should not include \
                         leading dots (e.g., use 'txt' not '.txt')",
                        bracket_list(dotted.iter().map(|f| format!("'{}'", f)))
                    ))
                    .at_line(entry.line_no, &entry.line),
                );
            }

            if entry.value.contains(' ') && !entry.value.contains(';') {
                issues.push(
                    Issue::warning(format!(
                        "File format '{}' contains spaces. Use semicolons to separate multiple formats",
                        entry.value
                    ))
                    .at_line(entry.line_no, &entry.line),
                );
            }
        }
        Ok(issues)
    }
}
