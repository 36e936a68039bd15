//! Shared state for wrapper script checks.

use std::fmt;
use std::path::Path;

/// Script language, which selects the language-specific heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    Python,
    Bash,
    R,
    Perl,
    Javascript,
    Ruby,
    Other,
}

impl ScriptType {
    /// Detect the language from the file extension, then the shebang line,
    /// then content heuristics.
    pub fn detect(path: &Path, content: &str) -> Self {
        Self::from_extension(path)
            .or_else(|| Self::from_shebang(content))
            .unwrap_or_else(|| Self::from_content(content))
    }

    fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "py" => Some(ScriptType::Python),
            "sh" | "bash" => Some(ScriptType::Bash),
            "r" => Some(ScriptType::R),
            "pl" | "perl" => Some(ScriptType::Perl),
            "js" | "javascript" => Some(ScriptType::Javascript),
            "rb" | "ruby" => Some(ScriptType::Ruby),
            _ => None,
        }
    }

    fn from_shebang(content: &str) -> Option<Self> {
        let first = content.split('\n').next()?;
        if !first.starts_with("#!") {
            return None;
        }
        let shebang = first.to_lowercase();
        if shebang.contains("python") {
            Some(ScriptType::Python)
        } else if ["bash", "sh", "zsh", "ksh"].iter().any(|s| shebang.contains(s)) {
            Some(ScriptType::Bash)
        } else if shebang.contains("/r") || shebang.contains("rscript") {
            Some(ScriptType::R)
        } else if shebang.contains("perl") {
            Some(ScriptType::Perl)
        } else if shebang.contains("node") || shebang.contains("javascript") {
            Some(ScriptType::Javascript)
        } else if shebang.contains("ruby") {
            Some(ScriptType::Ruby)
        } else {
            None
        }
    }

    fn from_content(content: &str) -> Self {
        const PYTHON: [&str; 6] = ["import ", "from ", "def ", "class ", "if __name__", "print("];
        const BASH: [&str; 7] = ["#!/bin/bash", "#!/bin/sh", "echo ", "$1", "${", "do\n", "fi\n"];
        const R: [&str; 5] = ["library(", "source(", "<-", "args <-", "commandargs("];

        let lower = content.to_lowercase();
        let has_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));
        if has_any(&PYTHON) {
            ScriptType::Python
        } else if has_any(&BASH) {
            ScriptType::Bash
        } else if has_any(&R) {
            ScriptType::R
        } else {
            ScriptType::Other
        }
    }

    /// Upper-case name used in messages.
    pub fn label(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScriptType::Python => "python",
            ScriptType::Bash => "bash",
            ScriptType::R => "r",
            ScriptType::Perl => "perl",
            ScriptType::Javascript => "javascript",
            ScriptType::Ruby => "ruby",
            ScriptType::Other => "other",
        })
    }
}

/// Context threaded through the wrapper checks.
#[derive(Debug, Clone, Default)]
pub struct WrapperContext {
    /// Parameters the script should reference (`--parameters`).
    pub expected_parameters: Option<Vec<String>>,
    /// Script text, set by file validation.
    pub content: Option<String>,
    /// Detected language, set by file validation.
    pub script_type: Option<ScriptType>,
}

impl WrapperContext {
    /// Content and type, or the issue a check reports without them.
    ///
    /// `subject` completes "Cannot validate ..."; `step` names the check in
    /// the follow-up context.
    pub(crate) fn script(
        &self,
        subject: &str,
        step: &str,
    ) -> Result<(&str, ScriptType), crate::lint::Issue> {
        use crate::lint::Issue;

        let Some(content) = self.content.as_deref() else {
            return Err(Issue::error(format!(
                "Cannot validate {}: script content not available",
                subject
            ))
            .with_context(format!("File validation must pass before {}", step)));
        };
        let Some(script_type) = self.script_type else {
            return Err(Issue::warning(format!(
                "Cannot determine script type for {}",
                step
            )));
        };
        Ok((content, script_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(path: &str, content: &str) -> ScriptType {
        ScriptType::detect(Path::new(path), content)
    }

    #[test]
    fn extension_wins() {
        assert_eq!(detect("run.R", "import os"), ScriptType::R);
        assert_eq!(detect("wrapper.py", "echo hi"), ScriptType::Python);
        assert_eq!(detect("run.bash", ""), ScriptType::Bash);
    }

    #[test]
    fn shebang_before_content() {
        assert_eq!(detect("run", "#!/usr/bin/env python3\necho x"), ScriptType::Python);
        assert_eq!(detect("run", "#!/usr/bin/env Rscript\n"), ScriptType::R);
        assert_eq!(detect("run", "#!/usr/bin/perl\n"), ScriptType::Perl);
    }

    #[test]
    fn content_heuristics() {
        assert_eq!(detect("run", "x <- 1\nlibrary(stats)"), ScriptType::R);
        assert_eq!(detect("run", "echo $1"), ScriptType::Bash);
        assert_eq!(detect("run", "nothing recognisable"), ScriptType::Other);
    }

    #[test]
    fn labels_are_upper_case() {
        assert_eq!(ScriptType::Javascript.label(), "JAVASCRIPT");
    }
}
