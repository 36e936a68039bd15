use crate::lint::{Check, CheckId, Issue, Target};
use crate::wrapper::heuristics::{count, head, signal, Grading, Tally};
use crate::wrapper::{ScriptType, WrapperContext};

/// Scores comments, docstrings and help text.
pub struct DocumentationCheck;

const GRADING: Grading = Grading {
    high: (8.0, "Well-documented script"),
    mid: (5.0, "Adequately documented script"),
    low: (2.0, "Minimally documented script"),
    low_hint: "Consider adding more documentation (docstrings, comments, help text)",
    none: (
        "Poorly documented script",
        "Add documentation to help users understand the script's purpose and usage",
    ),
};

const COMMENT_LINE: &str = r"(?m)^\s*#[^!]";
const HEADER_COMMENT: &str = r"(?m)^#[^!].*";

/// Points for the number of inline comments: `(above, points)` pairs,
/// highest first, with the wording for each tier.
fn comment_tiers(tally: &mut Tally, comments: usize, tiers: &[(usize, &str, f64)]) {
    if let Some((_, label, points)) = tiers.iter().find(|(above, _, _)| comments > *above) {
        tally.add(format!("{} ({} found)", label, comments), *points);
    }
}

fn header_comments(tally: &mut Tally, content: &str) {
    let header = count(HEADER_COMMENT, head(content, 500));
    if header > 3 {
        tally.add(format!("Header documentation ({} lines)", header), 2.0);
    } else if header > 0 {
        tally.add(format!("Some header comments ({} lines)", header), 1.0);
    }
}

fn python(content: &str) -> Tally {
    let mut tally = Tally::default();
    tally.apply(
        content,
        &[signal(r#"(?m)^[\s]*["'{3}]"#, "Module-level docstring", 2.0)],
    );
    let documented = count(r#"def\s+\w+\s*\([^)]*\)\s*:\s*["'{3}]"#, content);
    if documented > 0 {
        tally.add(
            format!("Function docstrings ({} found)", documented),
            documented.min(3) as f64,
        );
    }
    comment_tiers(
        &mut tally,
        count(COMMENT_LINE, content),
        &[(5, "Inline comments", 2.0), (0, "Some inline comments", 1.0)],
    );
    tally.apply(
        content,
        &[
            signal(r#"help\s*=\s*["']"#, "Argument help text", 2.0),
            signal(r#"description\s*=\s*["']"#, "Script description", 1.0),
            signal(
                r"(usage|example|Usage|Example|USAGE|EXAMPLE)",
                "Usage examples or instructions",
                1.0,
            ),
        ],
    );
    tally
}

fn bash(content: &str) -> Tally {
    let mut tally = Tally::default();
    header_comments(&mut tally, content);
    tally.apply(
        content,
        &[signal(r"(usage|help)\s*\(\s*\)\s*\{", "Usage/help function", 3.0)],
    );
    let commented_functions = count(r"#.*\n\s*\w+\s*\(\s*\)\s*\{", content);
    if commented_functions > 0 {
        tally.add(format!("Function comments ({} found)", commented_functions), 2.0);
    }
    comment_tiers(
        &mut tally,
        count(COMMENT_LINE, content),
        &[(10, "Inline comments", 2.0), (5, "Some inline comments", 1.0)],
    );
    tally.apply(
        content,
        &[signal(r"echo.*--\w+.*#", "Parameter descriptions in help", 1.0)],
    );
    tally
}

fn r(content: &str) -> Tally {
    let mut tally = Tally::default();
    header_comments(&mut tally, content);
    let roxygen = count(r"#'.*\n\s*\w+\s*<-\s*function", content);
    if roxygen > 0 {
        tally.add(format!("Roxygen-style function docs ({} found)", roxygen), 3.0);
    }
    let commented = count(r"#.*\n\s*\w+\s*<-\s*function", content);
    if commented > roxygen {
        tally.add(format!("Function comments ({} found)", commented), 2.0);
    }
    tally.apply(
        content,
        &[
            signal(r#"help\s*=\s*["']"#, "Parameter help text", 2.0),
            signal(r#"description\s*=\s*["']"#, "Script description", 1.0),
        ],
    );
    comment_tiers(
        &mut tally,
        count(COMMENT_LINE, content),
        &[(10, "Inline comments", 2.0), (5, "Some inline comments", 1.0)],
    );
    tally
}

fn generic(content: &str) -> Tally {
    let mut tally = Tally::default();
    let comments = count(r"(?m)^\s*#", content);
    let tiers: [(usize, &str, f64); 3] = [
        (10, "Comments", 3.0),
        (5, "Some comments", 2.0),
        (0, "Minimal comments", 1.0),
    ];
    comment_tiers(&mut tally, comments, &tiers);
    tally
}

/// Documentation score for a script of the given language.
pub(crate) fn assess(content: &str, script_type: ScriptType) -> Tally {
    match script_type {
        ScriptType::Python => python(content),
        ScriptType::Bash => bash(content),
        ScriptType::R => r(content),
        _ => generic(content),
    }
}

impl Check<WrapperContext> for DocumentationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("documentation")
    }

    fn name(&self) -> &str {
        "Documentation"
    }

    fn description(&self) -> &str {
        "Scores comments, docstrings and usage text"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) = match ctx.script("documentation", "documentation check") {
            Ok(script) => script,
            Err(issue) => return Ok(vec![issue]),
        };
        Ok(vec![assess(content, script_type).grade(&GRADING)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    #[test]
    fn documented_python() {
        let script = r#"#!/usr/bin/env python3
"""Run Kallisto quantification.

Usage: wrapper.py --index IDX
"""
import argparse

def main():
    """Entry point."""
    parser = argparse.ArgumentParser(description="Quantify reads")
    parser.add_argument("--index", help="Index file")
"#;
        let tally = assess(script, ScriptType::Python);
        assert_eq!(
            tally.found,
            vec![
                "Module-level docstring",
                "Function docstrings (1 found)",
                "Argument help text",
                "Script description",
                "Usage examples or instructions",
            ]
        );
        assert_eq!(tally.grade(&GRADING).severity, Severity::Info);
    }

    #[test]
    fn bash_header_and_usage() {
        let script = "#!/bin/bash\n# Wrapper for kallisto\n# Author: lab\nusage() {\n  echo \"--index FILE  # index\"\n}\n";
        let tally = assess(script, ScriptType::Bash);
        assert_eq!(
            tally.found,
            vec![
                "Some header comments (2 lines)",
                "Usage/help function",
                "Function comments (1 found)",
                "Parameter descriptions in help",
            ]
        );
        assert_eq!(tally.score, 7.0);
    }

    #[test]
    fn r_roxygen() {
        let script = "#' Run the analysis\nrun <- function() {}\n";
        let tally = assess(script, ScriptType::R);
        assert_eq!(tally.found[1], "Roxygen-style function docs (1 found)");
    }

    #[test]
    fn undocumented_generic_script() {
        let mut ctx = WrapperContext {
            content: Some("print 1;\n".into()),
            script_type: Some(ScriptType::Perl),
            ..Default::default()
        };
        let issues = DocumentationCheck
            .run(&Target::File("run.pl".into()), &mut ctx)
            .unwrap();
        assert_eq!(
            issues[0].format(),
            "WARNING: Poorly documented script (Add documentation to help users understand the script's purpose and usage)"
        );
    }
}
