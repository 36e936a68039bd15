use crate::lint::{Check, CheckId, Issue, Target};
use crate::wrapper::heuristics::matches;
use crate::wrapper::{ScriptType, WrapperContext};

/// The script appears to write result files.
pub struct OutputGenerationCheck;

/// `(pattern, description)`; all patterns are case-insensitive.
type Pattern = (&'static str, &'static str);

const PYTHON_WRITES: &[Pattern] = &[
    (r#"open\([^)]*["']w["']"#, "open() for writing"),
    (r"\.write\(", ".write()"),
    (r"\.to_csv\(", ".to_csv()"),
    (r"\.to_excel\(", ".to_excel()"),
    (r"\.savefig\(", ".savefig()"),
    (r"\.save\(", ".save()"),
    (r"pickle\.dump\(", "pickle.dump()"),
    (r"json\.dump\(", "json.dump()"),
    (r"numpy\.save\(", "numpy.save()"),
    (r#"with\s+open\([^)]*["']w"#, "with open() for writing"),
    (r"pathlib\.Path\([^)]*\.write_", "pathlib write"),
];

const PYTHON_VARS: &[Pattern] = &[
    (r"output[_\.]?file", "output file"),
    (r"out[_\.]?file", "out file"),
    (r"result[_\.]?file", "result file"),
    (r"output[_\.]?path", "output path"),
    (r"out[_\.]?dir", "output directory"),
];

const BASH_WRITES: &[Pattern] = &[
    (r#">\s*["$]"#, "redirection"),
    (r#">>\s*["$]"#, "append redirection"),
    (r"\|\s*tee\s+", "tee"),
    (r"cat\s+.*>\s*", "cat with redirection"),
    (r"echo\s+.*>\s*", "echo with redirection"),
    (r"printf\s+.*>\s*", "printf with redirection"),
    (r"\s+-o\s+", "-o flag"),
    (r"\s+--output\s+", "--output flag"),
    (r"\s+--out\s+", "--out flag"),
];

const BASH_VARS: &[Pattern] = &[
    (r"output[_]?file", "output file"),
    (r"out[_]?file", "out file"),
    (r"result[_]?file", "result file"),
    (r"output[_]?dir", "output directory"),
];

const R_WRITES: &[Pattern] = &[
    (r"write\.", "write.*()"),
    (r"save\(", "save()"),
    (r"saveRDS\(", "saveRDS()"),
    (r"ggsave\(", "ggsave()"),
    (r"pdf\(", "pdf device"),
    (r"png\(", "png device"),
    (r"jpeg\(", "jpeg device"),
    (r"svg\(", "svg device"),
    (r"sink\(", "sink()"),
    (r"cat\(.*file\s*=", "cat() to file"),
    (r"writeLines\(", "writeLines()"),
    (r"write\(", "write()"),
];

const R_VARS: &[Pattern] = &[
    (r"output[._]?file", "output file"),
    (r"out[._]?file", "out file"),
    (r"result[._]?file", "result file"),
    (r"output[._]?path", "output path"),
];

const GENERIC: &[Pattern] = &[
    (r#">\s*["$]"#, "redirection"),
    (r"write", "write"),
    (r"save", "save"),
    (r"output", "output"),
];

fn found(content: &str, patterns: &[Pattern], prefix: &str) -> Vec<String> {
    patterns
        .iter()
        .filter(|(pattern, _)| matches(&format!("(?i){}", pattern), content))
        .map(|(_, what)| format!("{}: {}", prefix, what))
        .collect()
}

/// Output-producing patterns found in a script of the given language.
pub(crate) fn output_patterns(content: &str, script_type: ScriptType) -> Vec<String> {
    let (writes, vars, prefix) = match script_type {
        ScriptType::Python => (PYTHON_WRITES, PYTHON_VARS, "Python output pattern"),
        ScriptType::Bash => (BASH_WRITES, BASH_VARS, "Bash output pattern"),
        ScriptType::R => (R_WRITES, R_VARS, "R output pattern"),
        _ => return found(content, GENERIC, "Generic output pattern"),
    };
    let mut patterns = found(content, writes, prefix);
    patterns.extend(found(content, vars, "Output variable"));
    patterns
}

impl Check<WrapperContext> for OutputGenerationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("output-generation")
    }

    fn name(&self) -> &str {
        "Output Generation"
    }

    fn description(&self) -> &str {
        "Checks the script writes output files"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) =
            match ctx.script("output generation", "output generation validation") {
                Ok(script) => script,
                Err(issue) => return Ok(vec![issue]),
            };
        let patterns = output_patterns(content, script_type);
        if patterns.is_empty() {
            return Ok(vec![Issue::warning(
                "No obvious output generation patterns found in script",
            )
            .with_context(
                "GenePattern modules typically generate output files. Verify the script produces expected outputs.",
            )]);
        }
        tracing::debug!("Output patterns: {:?}", patterns);
        Ok(vec![Issue::info(format!(
            "Script appears to generate output ({} pattern(s) found)",
            patterns.len()
        ))])
    }
}
