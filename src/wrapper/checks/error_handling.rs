use crate::lint::{Check, CheckId, Issue, Target};
use crate::wrapper::heuristics::{signal, Grading, Signal, Tally};
use crate::wrapper::{ScriptType, WrapperContext};

/// Scores exception handling, exit codes and error reporting.
pub struct ErrorHandlingCheck;

const GRADING: Grading = Grading {
    high: (5.0, "Good error handling detected"),
    mid: (3.0, "Basic error handling detected"),
    low: (1.0, "Minimal error handling detected"),
    low_hint: "Consider adding more comprehensive error handling (try-catch, input validation, exit codes)",
    none: (
        "No error handling patterns detected",
        "Robust error handling is important for production GenePattern modules",
    ),
};

const PYTHON: &[Signal] = &[
    signal(r"\btry\s*:", "try-except block", 2.0),
    signal(r"\bexcept\s+\w+", "Specific exception catching", 1.0),
    signal(r"sys\.exit\s*\(", "sys.exit() usage", 1.0),
    signal(r"\braise\s+\w+", "Raising exceptions", 1.0),
    signal(r"(?i)logging\.(error|warning|exception)", "Error logging", 1.0),
    signal(r"sys\.stderr\.write", "Writing to stderr", 1.0),
    signal(r"os\.path\.exists|Path\([^)]+\)\.exists", "File existence checking", 1.0),
    signal(
        r"subprocess\.run\([^)]*check\s*=\s*True",
        "Subprocess error checking (check=True)",
        1.0,
    ),
    signal(r"subprocess\.CalledProcessError", "Subprocess error handling", 1.0),
    signal(r"\bassert\s+", "Assert statements", 0.5),
];

const BASH: &[Signal] = &[
    signal(r"set\s+-e", "set -e (exit on error)", 2.0),
    signal(r"set\s+-o\s+pipefail", "set -o pipefail", 1.0),
    signal(r"\$\?", "Exit code checking ($?)", 1.0),
    signal(r"if\s+\[\s*\$\?\s*-ne\s*0", "Explicit exit code checking", 1.0),
    signal(r"\[\s*-[ef]\s+", "File existence checking (-e/-f)", 1.0),
    signal(r">&2|1>&2", "Redirecting to stderr", 1.0),
    signal(r"trap\s+", "Error trap handling", 2.0),
    signal(r"\bexit\s+[1-9]", "Non-zero exit codes", 1.0),
    signal(r"(die|error|fail)\s*\(\s*\)", "Error handling function", 1.0),
];

const R: &[Signal] = &[
    signal(r"tryCatch\s*\(", "tryCatch block", 2.0),
    signal(r"\btry\s*\(", "try() block", 1.0),
    signal(r"error\s*=\s*function", "Error handling function", 1.0),
    signal(r"warning\s*=\s*function", "Warning handling function", 1.0),
    signal(r"\bstop\s*\(", "stop() calls", 1.0),
    signal(r"\bwarning\s*\(", "warning() calls", 0.5),
    signal(r"quit\s*\(\s*status\s*=", "quit() with status code", 1.0),
    signal(r"file\.exists\s*\(", "file.exists() checking", 1.0),
    signal(r"\bstopifnot\s*\(", "stopifnot() assertions", 1.0),
    signal(r#"(?i)cat\s*\(\s*["']Error"#, "Error messages", 0.5),
];

const GENERIC: &[Signal] = &[
    signal(r"(?i)\btry\b", "try statement", 1.0),
    signal(r"(?i)\bcatch\b", "catch statement", 1.0),
    signal(r"(?i)\berror\b", "error handling", 1.0),
    signal(r"(?i)\bexit\s+[1-9]", "non-zero exit", 1.0),
];

/// Error handling score for a script of the given language.
pub(crate) fn assess(content: &str, script_type: ScriptType) -> Tally {
    let signals = match script_type {
        ScriptType::Python => PYTHON,
        ScriptType::Bash => BASH,
        ScriptType::R => R,
        _ => GENERIC,
    };
    let mut tally = Tally::default();
    tally.apply(content, signals);
    tally
}

impl Check<WrapperContext> for ErrorHandlingCheck {
    fn id(&self) -> CheckId {
        CheckId::new("error-handling")
    }

    fn name(&self) -> &str {
        "Error Handling"
    }

    fn description(&self) -> &str {
        "Scores exception handling, exit codes and error output"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) =
            match ctx.script("error handling", "error handling validation") {
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
    fn all_signal_patterns_compile() {
        for s in PYTHON.iter().chain(BASH).chain(R).chain(GENERIC) {
            assert!(regex::Regex::new(s.pattern).is_ok(), "{}", s.pattern);
        }
    }

    #[test]
    fn python_half_points() {
        let script = "try:\n    run()\nexcept OSError:\n    sys.exit(1)\nassert ok\n";
        let tally = assess(script, ScriptType::Python);
        assert_eq!(tally.score, 4.5);
        assert_eq!(
            tally.grade(&GRADING).message,
            "Basic error handling detected (score: 4.5, 4 pattern(s) found)"
        );
    }

    #[test]
    fn strict_bash() {
        let script = "set -e\nset -o pipefail\ntrap cleanup EXIT\n[ -f \"$1\" ] || { echo missing >&2; exit 1; }\n";
        let issue = assess(script, ScriptType::Bash).grade(&GRADING);
        assert_eq!(issue.severity, Severity::Info);
        assert!(issue.message.starts_with("Good error handling detected (score: 8,"));
    }

    #[test]
    fn nothing_found() {
        let mut ctx = WrapperContext {
            content: Some("x <- 1\n".into()),
            script_type: Some(ScriptType::R),
            ..Default::default()
        };
        let issues = ErrorHandlingCheck
            .run(&Target::File("run.R".into()), &mut ctx)
            .unwrap();
        assert_eq!(issues[0].message, "No error handling patterns detected");
    }
}
