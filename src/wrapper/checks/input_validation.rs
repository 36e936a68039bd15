use crate::lint::{Check, CheckId, Issue, Target};
use crate::wrapper::heuristics::{signal, Grading, Signal, Tally};
use crate::wrapper::{ScriptType, WrapperContext};

/// Scores how thoroughly the script checks its inputs.
pub struct InputValidationCheck;

const GRADING: Grading = Grading {
    high: (6.0, "Comprehensive input validation detected"),
    mid: (3.0, "Basic input validation detected"),
    low: (1.0, "Minimal input validation detected"),
    low_hint: "Consider adding more input validation (file existence, type checking, required parameters)",
    none: (
        "No input validation patterns detected",
        "Input validation helps prevent errors and provides better user experience",
    ),
};

const PYTHON: &[Signal] = &[
    signal(r"os\.path\.exists\s*\(", "os.path.exists() checking", 2.0),
    signal(r"Path\([^)]+\)\.exists\s*\(", "pathlib Path.exists() checking", 2.0),
    signal(r"os\.path\.isfile\s*\(", "os.path.isfile() checking", 1.0),
    signal(r"os\.path\.isdir\s*\(", "os.path.isdir() checking", 1.0),
    signal(r"os\.access\s*\([^)]*os\.R_OK", "File readability checking", 1.0),
    signal(r"required\s*=\s*True", "Required parameters defined", 1.0),
    signal(r"def\s+validate_\w+\s*\(", "Validation functions defined", 2.0),
    signal(r"type\s*=\s*(int|float|str)", "Type validation in argparse", 1.0),
    signal(r"choices\s*=\s*\[", "Choice validation in argparse", 1.0),
    signal(r"\.endswith\s*\(", "File extension checking", 1.0),
    signal(r"if\s+not\s+\w+:|if\s+\w+\s+is\s+None", "Empty/None value checking", 1.0),
    signal(r"if\s+\w+\s*[<>]=?\s*\d+", "Value range checking", 1.0),
];

const BASH: &[Signal] = &[
    signal(r#"\[\s*-[ef]\s+["$]"#, "File existence checking (-e/-f)", 2.0),
    signal(r#"\[\s*-d\s+["$]"#, "Directory checking (-d)", 1.0),
    signal(r#"\[\s*-r\s+["$]"#, "File readability checking (-r)", 1.0),
    signal(r#"\[\s*-z\s+["$]"#, "Empty variable checking (-z)", 1.0),
    signal(
        r#"(?i)if\s+\[\[\s*-z\s+["$].*\]\].*echo.*required"#,
        "Required parameter validation",
        2.0,
    ),
    signal(r"(usage|help)\s*\(\s*\)\s*\{", "Usage/help function defined", 1.0),
    signal(r"case\s+\$\d+\s+in", "Parameter validation in case statement", 1.0),
    signal(r"\[\[\s*\$\w+\s*=~\s*\^[0-9]", "Numeric validation with regex", 1.0),
];

const R: &[Signal] = &[
    signal(r"file\.exists\s*\(", "file.exists() checking", 2.0),
    signal(r"dir\.exists\s*\(", "dir.exists() checking", 1.0),
    signal(r"is\.null\s*\(", "is.null() checking", 1.0),
    signal(r"is\.na\s*\(", "is.na() checking", 1.0),
    signal(r"stopifnot\s*\(", "stopifnot() assertions", 2.0),
    signal(r"default\s*=\s*NULL", "Required parameters (default=NULL)", 1.0),
    signal(
        r"is\.(numeric|integer|character|logical)\s*\(",
        "Type validation functions",
        1.0,
    ),
    signal(r"validate\w*\s*<-\s*function", "Validation functions defined", 2.0),
    signal(r#"grepl\s*\(["'].*\\.(csv|txt|tsv)"#, "File format validation", 1.0),
    signal(
        r"if\s*\(\s*is\.null\s*\(\s*args\$\w+\s*\)\s*\)",
        "Argument validation",
        1.0,
    ),
];

const GENERIC: &[Signal] = &[
    signal(r"(?i)exists", "existence checking", 1.0),
    signal(r"(?i)validate|check", "validation/checking", 1.0),
    signal(r"(?i)required", "required parameter handling", 1.0),
];

/// Input validation score for a script of the given language.
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

impl Check<WrapperContext> for InputValidationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("input-validation")
    }

    fn name(&self) -> &str {
        "Input Validation"
    }

    fn description(&self) -> &str {
        "Scores file existence, type and required-value checks on inputs"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) =
            match ctx.script("input validation", "input validation check") {
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
    fn python_argparse_validation() {
        let script = r#"
parser.add_argument("--input", required=True, type=str)
parser.add_argument("--mode", choices=["a", "b"])
if not os.path.exists(args.input):
    sys.exit(1)
"#;
        let tally = assess(script, ScriptType::Python);
        assert_eq!(
            tally.found,
            vec![
                "os.path.exists() checking",
                "Required parameters defined",
                "Type validation in argparse",
                "Choice validation in argparse",
            ]
        );
        assert_eq!(tally.grade(&GRADING).severity, Severity::Info);
    }

    #[test]
    fn bash_file_checks() {
        let script = "if [ -f \"$INPUT\" ]; then\n  echo ok\nfi\nif [ -z \"$OUT\" ]; then exit 1; fi\n";
        let tally = assess(script, ScriptType::Bash);
        assert_eq!(tally.score, 3.0);
    }

    #[test]
    fn generic_minimal() {
        let issue = assess("check the input", ScriptType::Ruby).grade(&GRADING);
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(
            issue.message,
            "Minimal input validation detected (score: 1, 1 pattern(s) found)"
        );
    }
}
