use crate::lint::{Check, CheckId, Issue, Target};
use crate::wrapper::heuristics::{count, signal, Grading, Signal, Tally};
use crate::wrapper::{ScriptType, WrapperContext};

/// Scores how the script is organised as a command-line program.
pub struct CommandStructureCheck;

const GRADING: Grading = Grading {
    high: (8.0, "Excellent command structure"),
    mid: (5.0, "Good command structure"),
    low: (2.0, "Basic command structure"),
    low_hint: "Consider improving organization (main function, proper CLI parsing, function decomposition)",
    none: (
        "Poor command structure detected",
        "Improve script organization for better maintainability",
    ),
};

fn function_count(tally: &mut Tally, functions: usize) {
    if functions >= 5 {
        tally.add(format!("Well-organized with {} functions", functions), 2.0);
    } else if functions >= 3 {
        tally.add(format!("Organized with {} functions", functions), 1.0);
    }
}

fn python(content: &str) -> Tally {
    let mut tally = Tally::default();
    tally.apply(
        content,
        &[signal(
            r#"if\s+__name__\s*==\s*["']__main__["']"#,
            "Proper main execution block",
            3.0,
        )],
    );
    tally.apply_first(
        content,
        &[
            signal(r"argparse\.ArgumentParser", "Using argparse for CLI", 2.0),
            signal(r"(?s)import\s+sys.*sys\.argv", "Manual argument parsing", 1.0),
        ],
    );
    tally.apply(content, &[signal(r"def\s+main\s*\(", "Main function defined", 2.0)]);
    function_count(&mut tally, count(r"def\s+\w+\s*\(", content));
    tally.apply(
        content,
        &[
            signal(r"(?m)^import\s+|^from\s+\w+\s+import", "Proper import statements", 1.0),
            signal(
                r"subprocess\.(run|call|Popen)",
                "Uses subprocess for command execution",
                1.0,
            ),
            signal(r"class\s+\w+", "Class-based organization", 1.0),
        ],
    );
    tally
}

fn bash(content: &str) -> Tally {
    let mut tally = Tally::default();
    let first = content.split('\n').next().unwrap_or("").trim();
    if first == "#!/bin/bash" || first == "#!/usr/bin/env bash" {
        tally.add("Proper bash shebang", 1.0);
    }
    tally.apply(
        content,
        &[signal(r"set\s+-[euo]+", "Strict error handling (set -e/u/o)", 2.0)],
    );
    function_count(&mut tally, count(r"\w+\s*\(\s*\)\s*\{", content));
    tally.apply(
        content,
        &[signal(r"(usage|help)\s*\(\s*\)\s*\{", "Usage/help function", 2.0)],
    );
    tally.apply_first(
        content,
        &[
            signal(
                r"while\s+\[\[\s*\$#\s*-gt\s*0\s*\]\]",
                "Proper argument parsing loop",
                2.0,
            ),
            signal(r"case\s+\$1\s+in", "Case-based argument parsing", 1.0),
        ],
    );
    tally.apply(
        content,
        &[signal(r"#.*[Mm]ain|#.*[Ee]xecution", "Clearly marked main section", 1.0)],
    );
    tally
}

fn r(content: &str) -> Tally {
    let mut tally = Tally::default();
    if content
        .split('\n')
        .next()
        .is_some_and(|l| l.to_lowercase().contains("rscript"))
    {
        tally.add("Proper Rscript shebang", 1.0);
    }
    tally.apply_first(
        content,
        &[
            signal(r"library\s*\(\s*optparse\s*\)", "Using optparse for CLI", 3.0),
            signal(r"commandArgs\s*\(", "Manual argument parsing", 1.0),
        ],
    );
    tally.apply(content, &[signal(r"OptionParser\s*\(", "OptionParser configured", 2.0)]);
    function_count(&mut tally, count(r"\w+\s*<-\s*function\s*\(", content));
    tally.apply(
        content,
        &[
            signal(r"(main|run_analysis)\s*<-\s*function", "Main execution function", 2.0),
            signal(r"suppressPackageStartupMessages", "Clean library loading", 1.0),
            signal(r"tryCatch\s*\(\s*\{", "Main execution in tryCatch", 1.0),
        ],
    );
    tally
}

const GENERIC: &[Signal] = &[
    signal(r"def\s+\w+|function\s+\w+|\w+\s*\(\s*\)", "Function definitions", 1.0),
    signal(r"#!", "Shebang line", 1.0),
];

/// Structure score for a script of the given language.
pub(crate) fn assess(content: &str, script_type: ScriptType) -> Tally {
    match script_type {
        ScriptType::Python => python(content),
        ScriptType::Bash => bash(content),
        ScriptType::R => r(content),
        _ => {
            let mut tally = Tally::default();
            tally.apply(content, GENERIC);
            tally
        }
    }
}

impl Check<WrapperContext> for CommandStructureCheck {
    fn id(&self) -> CheckId {
        CheckId::new("command-structure")
    }

    fn name(&self) -> &str {
        "Command Structure"
    }

    fn description(&self) -> &str {
        "Scores entry point, argument parsing and function decomposition"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) =
            match ctx.script("command structure", "command structure check") {
                Ok(script) => script,
                Err(issue) => return Ok(vec![issue]),
            };
        let tally = assess(content, script_type);
        tracing::debug!("Command structure patterns: {:?}", tally.found);
        Ok(vec![tally.grade(&GRADING)])
    }
}
