//! Expected parameters must be referenced by the script.
//!
//! Each language has its own idea of what "referencing" a parameter looks
//! like: an argparse option in Python, a `$var` in Bash, an optparse
//! option in R. Matching is case-insensitive.

use crate::lint::{pattern, Check, CheckId, Issue, Target};
use crate::wrapper::{ScriptType, WrapperContext};

/// A usage shape. `{}` stands for the escaped parameter name.
type Shape = (&'static str, &'static str);

const PYTHON_SHAPES: &[Shape] = &[
    ("argparse option '--<name>'", r#"add_argument\(["']--{}["']"#),
    ("argparse option '-<name>'", r#"add_argument\(["']-{}["']"#),
    ("argparse positional '<name>'", r#"add_argument\(["']{}["']"#),
    ("'args.<name>'", r"args\.{}\b"),
    ("'options.<name>'", r"options\.{}\b"),
    ("'config.<name>'", r"config\.{}\b"),
    ("mapping key", r#"["']?{}["']?\s*[:\]]\s*"#),
    ("assignment", r"{}\s*="),
    ("function argument", r"def\s+\w+\([^)]*\b{}\b"),
    ("sys.argv access", r"sys\.argv"),
    ("click option", r#"@click\.option\(["']--{}["']"#),
    ("environment lookup", r#"os\.environ\.get\(["']{}["']"#),
    ("getenv lookup", r#"getenv\(["']{}["']"#),
];

const BASH_SHAPES: &[Shape] = &[
    ("positional argument", r"\$\d+"),
    ("assignment", r"{}\s*="),
    ("'$<name>'", r"\${}\b"),
    ("'${<name>}'", r"\$\{{}[}:]"),
    ("'--<name>'", r"--{}\b"),
    ("'-<name>'", r"-{}\b"),
    ("getopts", r"getopts.*{}"),
    ("case option '--<name>)'", r"--{}\)"),
    ("case option '-<name>)'", r"-{}\)"),
    ("read", r"read\s+{}\b"),
];

const R_SHAPES: &[Shape] = &[
    ("'<-' assignment", r"{}\s*<-"),
    ("'=' assignment", r"{}\s*="),
    ("commandArgs()", r"commandargs\(\)"),
    ("'args[<name>]'", r#"args\[["']?{}["']?\]"#),
    ("optparse add_option", r#"add_option\(["']--{}["']"#),
    ("optparse make_option", r#"make_option\(["']--{}["']"#),
    ("argparse option", r#"add_argument\(["']--{}["']"#),
    ("'config$<name>'", r"config\${}\b"),
    ("'params$<name>'", r"params\${}\b"),
    ("'args$<name>'", r"args\${}\b"),
    ("'options$<name>'", r"options\${}\b"),
];

const GENERIC_SHAPES: &[Shape] = &[
    ("assignment", r"{}\s*[=:]"),
    ("'--<name>'", r"--{}\b"),
    ("'-<name>'", r"-{}\b"),
    ("'$<name>'", r"\${}\b"),
    ("'${<name>'", r"\$\{{}"),
    ("whole word", r"\b{}\b"),
];

fn shape_matches(content: &str, param: &str, shapes: &[Shape], prefix: &str) -> Vec<String> {
    let escaped = regex::escape(param);
    shapes
        .iter()
        .filter(|(_, shape)| {
            pattern::is_match(&format!("(?m){}", shape.replace("{}", &escaped)), content)
        })
        .map(|(label, _)| format!("{} pattern: {}", prefix, label))
        .collect()
}

/// Every way `param` is referenced in a script of the given language.
pub fn parameter_references(content: &str, param: &str, script_type: ScriptType) -> Vec<String> {
    let content = content.to_lowercase();
    let param_lower = param.to_lowercase();

    let (shapes, prefix) = match script_type {
        ScriptType::Python => (PYTHON_SHAPES, "Python"),
        ScriptType::Bash => (BASH_SHAPES, "Bash"),
        ScriptType::R => (R_SHAPES, "R"),
        _ => return shape_matches(&content, &param_lower, GENERIC_SHAPES, "Generic"),
    };
    let mut found = shape_matches(&content, &param_lower, shapes, prefix);
    if content.contains(&param_lower) {
        found.push(format!("String match: '{}'", param));
    }
    found
}

/// The script references every expected parameter.
pub struct ParameterCheck;

impl Check<WrapperContext> for ParameterCheck {
    fn id(&self) -> CheckId {
        CheckId::new("parameter-validation")
    }

    fn name(&self) -> &str {
        "Parameter Validation"
    }

    fn description(&self) -> &str {
        "Validates the script references each parameter given with --parameters"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let Some(expected) = ctx.expected_parameters.as_ref().filter(|p| !p.is_empty()) else {
            return Ok(vec![Issue::info(
                "Parameter validation skipped - no expected parameters provided",
            )
            .with_context("Use --parameters to enable parameter validation")]);
        };
        let Some(content) = ctx.content.as_deref() else {
            return Ok(vec![Issue::error(
                "Cannot validate parameters: script content not available",
            )
            .with_context("File validation must pass before parameter validation")]);
        };
        let script_type = ctx.script_type.unwrap_or(ScriptType::Other);

        let mut issues = Vec::new();
        let mut missing = 0;
        for param in expected {
            match parameter_references(content, param, script_type).into_iter().next() {
                Some(first) => {
                    issues.push(Issue::info(format!("Parameter '{}' found: {}", param, first)))
                }
                None => {
                    missing += 1;
                    issues.push(
                        Issue::error(format!(
                            "Parameter '{}' not found in {} script",
                            param,
                            script_type.label()
                        ))
                        .with_context("Expected parameter should appear in script"),
                    );
                }
            }
        }

        let total = expected.len();
        issues.push(if missing == 0 {
            Issue::info(format!("All {} expected parameters found in script", total))
        } else {
            Issue::info(format!(
                "Parameter validation summary: {}/{} parameters found, {} missing",
                total - missing,
                total,
                missing
            ))
        });
        Ok(issues)
    }
}
