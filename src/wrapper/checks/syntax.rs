use std::path::Path;
use std::time::Duration;

use crate::config::Tools;
use crate::error::LintError;
use crate::lint::{Check, CheckId, Issue, Target};
use crate::shell::{execute, CommandOptions};
use crate::wrapper::{ScriptType, WrapperContext};

/// Parses the script with its language's own tool where one exists.
pub struct SyntaxCheck {
    tools: Tools,
    timeout: Duration,
}

/// Parses the file named by `argv[1]` and prints the first syntax error.
const PYTHON_PARSE: &str = r#"
import ast, sys
try:
    ast.parse(open(sys.argv[1], 'rb').read())
except SyntaxError as e:
    msg = 'Line %s: %s' % (e.lineno, e.msg)
    if e.text:
        msg += " ('%s')" % e.text.strip()
    print(msg)
    sys.exit(1)
"#;

enum Outcome {
    Valid,
    Invalid(String),
    Unchecked(String),
}

/// Wording for one language's results.
struct Language {
    name: &'static str,
    unchecked_name: &'static str,
}

const PYTHON: Language = Language {
    name: "Python",
    unchecked_name: "Python",
};
const BASH: Language = Language {
    name: "Bash",
    unchecked_name: "bash",
};
const R: Language = Language {
    name: "R",
    unchecked_name: "R",
};

impl SyntaxCheck {
    pub fn new(tools: Tools, timeout: Duration) -> Self {
        Self { tools, timeout }
    }

    fn run_tool(
        &self,
        program: &str,
        args: &[&str],
        lang: &Language,
        interpret: impl FnOnce(crate::shell::CommandResult) -> Outcome,
    ) -> Outcome {
        match execute(program, args, &CommandOptions::with_timeout(self.timeout)) {
            Ok(result) if result.timed_out => Outcome::Unchecked("syntax check timed out".into()),
            Ok(result) => interpret(result),
            Err(LintError::ToolNotFound { program }) => Outcome::Unchecked(format!(
                "{} command not found - cannot validate {} syntax",
                program, lang.name
            )),
            Err(e) => Outcome::Unchecked(e.to_string()),
        }
    }

    fn python(&self, path: &str) -> Outcome {
        self.run_tool(&self.tools.python, &["-c", PYTHON_PARSE, path], &PYTHON, |r| {
            if r.success {
                Outcome::Valid
            } else if !r.stdout.trim().is_empty() {
                Outcome::Invalid(r.stdout.trim().to_string())
            } else {
                Outcome::Invalid(format!("Parse error: {}", last_line(&r.stderr)))
            }
        })
    }

    fn bash(&self, path: &str) -> Outcome {
        self.run_tool(&self.tools.bash, &["-n", path], &BASH, |r| {
            if r.success {
                Outcome::Valid
            } else {
                Outcome::Invalid(r.stderr.trim().to_string())
            }
        })
    }

    fn r(&self, path: &str) -> Outcome {
        let escaped = path.replace('\\', "\\\\").replace('"', "\\\"");
        let expr = format!(
            r#"tryCatch(parse(file="{}"), error=function(e) cat("ERROR:", e$message, "\n"))"#,
            escaped
        );
        self.run_tool(&self.tools.rscript, &["--slave", "-e", &expr], &R, |r| {
            if r.stdout.contains("ERROR:") {
                Outcome::Invalid(r.stdout.replace("ERROR:", "").trim().to_string())
            } else if r.success {
                Outcome::Valid
            } else if !r.stderr.trim().is_empty() {
                Outcome::Invalid(r.stderr.trim().to_string())
            } else {
                Outcome::Invalid("Unknown R syntax error".into())
            }
        })
    }
}

fn last_line(text: &str) -> &str {
    text.trim().lines().last().unwrap_or("")
}

fn report(lang: &Language, outcome: Outcome) -> Issue {
    match outcome {
        Outcome::Valid => Issue::info(format!("{} syntax is valid", lang.name)),
        Outcome::Invalid(msg) => Issue::error(format!("{} syntax error: {}", lang.name, msg)),
        Outcome::Unchecked(msg) => Issue::warning(format!(
            "Could not validate {} syntax: {}",
            lang.unchecked_name, msg
        )),
    }
}

/// Quote and bracket balance per line, for languages without a parser.
pub(crate) fn basic_syntax_issues(content: &str) -> Vec<String> {
    let mut found = Vec::new();
    for (idx, line) in content.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let n = idx + 1;
        let occurrences = |s: &str| line.matches(s).count() as isize;

        if (occurrences("'") - occurrences("\\'")) % 2 != 0 {
            found.push(format!("Line {}: Potential unmatched single quote", n));
        }
        if (occurrences("\"") - occurrences("\\\"")) % 2 != 0 {
            found.push(format!("Line {}: Potential unmatched double quote", n));
        }
        for (open, close, what) in [("(", ")", "parentheses"), ("[", "]", "brackets"), ("{", "}", "braces")] {
            if occurrences(open) != occurrences(close) {
                found.push(format!("Line {}: Unmatched {}", n, what));
            }
        }
    }
    found
}

impl Check<WrapperContext> for SyntaxCheck {
    fn id(&self) -> CheckId {
        CheckId::new("syntax-validation")
    }

    fn name(&self) -> &str {
        "Syntax Validation"
    }

    fn description(&self) -> &str {
        "Validates script syntax with python3, bash -n or Rscript"
    }

    fn run(&self, target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) = match ctx.script("syntax", "syntax validation") {
            Ok(script) => script,
            Err(issue) => return Ok(vec![issue]),
        };
        let path = target
            .path()
            .map(Path::to_string_lossy)
            .unwrap_or_default()
            .into_owned();
        tracing::debug!("Checking {} syntax of {}", script_type, path);

        let issue = match script_type {
            ScriptType::Python => report(&PYTHON, self.python(&path)),
            ScriptType::Bash => report(&BASH, self.bash(&path)),
            ScriptType::R => report(&R, self.r(&path)),
            other => {
                let mut issues = vec![Issue::info(format!(
                    "Syntax validation for {} scripts not fully supported",
                    other.label()
                ))
                .with_context("Performing basic syntax checks only")];
                let basic = basic_syntax_issues(content);
                if basic.is_empty() {
                    issues.push(Issue::info("No obvious syntax issues found in basic check"));
                }
                issues.extend(
                    basic
                        .into_iter()
                        .map(|b| Issue::warning(format!("Potential syntax issue: {}", b))),
                );
                return Ok(issues);
            }
        };
        Ok(vec![issue])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use std::fs;
    use tempfile::TempDir;

    fn missing_tools() -> Tools {
        Tools {
            python: "gplint-missing-python".into(),
            bash: "gplint-missing-bash".into(),
            rscript: "gplint-missing-rscript".into(),
            ..Tools::default()
        }
    }

    fn run(check: &SyntaxCheck, path: &Path, script_type: ScriptType) -> Vec<Issue> {
        let mut ctx = WrapperContext {
            content: Some(fs::read_to_string(path).unwrap()),
            script_type: Some(script_type),
            ..Default::default()
        };
        check
            .run(&Target::File(path.to_path_buf()), &mut ctx)
            .unwrap()
    }

    #[test]
    fn missing_tool_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.sh");
        fs::write(&path, "echo hi\n").unwrap();
        let check = SyntaxCheck::new(missing_tools(), Duration::from_secs(5));

        let issues = run(&check, &path, ScriptType::Bash);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].message,
            "Could not validate bash syntax: gplint-missing-bash command not found - cannot validate Bash syntax"
        );
    }

    #[test]
    fn requires_content() {
        let check = SyntaxCheck::new(missing_tools(), Duration::from_secs(5));
        let issues = check
            .run(&Target::File("run.py".into()), &mut WrapperContext::default())
            .unwrap();
        assert_eq!(
            issues[0].format(),
            "ERROR: Cannot validate syntax: script content not available (File validation must pass before syntax validation)"
        );
    }

    #[test]
    fn basic_checks_for_other_languages() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.pl");
        fs::write(&path, "print \"hello;\nmy @a = (1, 2;\nprint 'it\\'s';\n").unwrap();
        let check = SyntaxCheck::new(missing_tools(), Duration::from_secs(5));

        let issues = run(&check, &path, ScriptType::Perl);
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Syntax validation for PERL scripts not fully supported",
                "Potential syntax issue: Line 1: Potential unmatched double quote",
                "Potential syntax issue: Line 2: Unmatched parentheses",
            ]
        );
    }

    #[test]
    fn balanced_other_script() {
        assert!(basic_syntax_issues("console.log('ok');\nf([1], {a: 2});\n").is_empty());
    }

    #[cfg(unix)]
    fn fake_tool(dir: &TempDir, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    #[test]
    fn bash_errors_come_from_stderr() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.sh");
        fs::write(&path, "if true; then\n").unwrap();
        let tools = Tools {
            bash: fake_tool(&temp, "bash", "echo 'line 2: syntax error: unexpected end of file' >&2; exit 2"),
            ..missing_tools()
        };

        let issues = run(&SyntaxCheck::new(tools, Duration::from_secs(5)), &path, ScriptType::Bash);
        assert_eq!(
            issues[0].format(),
            "ERROR: Bash syntax error: line 2: syntax error: unexpected end of file"
        );
    }

    #[cfg(unix)]
    #[test]
    fn python_error_from_parser_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.py");
        fs::write(&path, "def f(:\n").unwrap();
        let tools = Tools {
            python: fake_tool(&temp, "python", "echo \"Line 1: invalid syntax ('def f(:')\"; exit 1"),
            ..missing_tools()
        };

        let issues = run(&SyntaxCheck::new(tools, Duration::from_secs(5)), &path, ScriptType::Python);
        assert_eq!(
            issues[0].message,
            "Python syntax error: Line 1: invalid syntax ('def f(:')"
        );
    }

    #[cfg(unix)]
    #[test]
    fn r_parse_errors_and_success() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.R");
        fs::write(&path, "x <- \n").unwrap();
        let failing = Tools {
            rscript: fake_tool(&temp, "Rscript-bad", "echo 'ERROR: unexpected end of input'"),
            ..missing_tools()
        };
        let passing = Tools {
            rscript: fake_tool(&temp, "Rscript-ok", "exit 0"),
            ..missing_tools()
        };

        let issues = run(&SyntaxCheck::new(failing, Duration::from_secs(5)), &path, ScriptType::R);
        assert_eq!(issues[0].message, "R syntax error: unexpected end of input");
        let issues = run(&SyntaxCheck::new(passing, Duration::from_secs(5)), &path, ScriptType::R);
        assert_eq!(issues[0].format(), "INFO: R syntax is valid");
    }
}
