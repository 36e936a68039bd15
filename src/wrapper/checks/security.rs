//! Unsafe coding patterns in wrapper scripts.
//!
//! Every concern is a warning; none fails validation. Recognised safe
//! practices are counted and reported alongside.

use crate::lint::{lazy_regex, Check, CheckId, Issue, Target};
use crate::wrapper::heuristics::{count, matches};
use crate::wrapper::{ScriptType, WrapperContext};

lazy_regex!(PASSWORD_LITERAL, r#"(?i)password\s*=\s*["']([^"']{8,})["']"#);
lazy_regex!(API_KEY_LITERAL, r#"(?i)api[_-]?key\s*=\s*["']([^"']{16,})["']"#);
lazy_regex!(SHELL_VARIABLE, r"\$\w+");
lazy_regex!(COMMAND_SUBSTITUTION, r"\$\(\s*[^)]+\s*\)");
lazy_regex!(RM_RF, r"\brm\s+-rf\s+/");

/// Findings of one script: concerns and safe practices.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Assessment {
    pub concerns: Vec<String>,
    pub safe: Vec<String>,
}

impl Assessment {
    fn concern_if(&mut self, hit: bool, what: impl Into<String>) {
        if hit {
            self.concerns.push(what.into());
        }
    }

    fn safe_if(&mut self, hit: bool, what: impl Into<String>) {
        if hit {
            self.safe.push(what.into());
        }
    }
}

/// A quoted literal assigned to a secret-looking name, unless the rest of
/// its line interpolates (`$` or `%s`).
fn hardcoded_literal(re: &regex::Regex, content: &str) -> bool {
    re.captures_iter(content).any(|caps| {
        caps.get(1).is_some_and(|value| {
            let rest = content[value.start()..].split('\n').next().unwrap_or("");
            !rest.contains('$') && !rest.contains("%s")
        })
    })
}

/// `$name` neither preceded nor followed by a quote.
fn unquoted_variables(content: &str) -> usize {
    let bytes = content.as_bytes();
    let is_quote = |b: u8| b == b'"' || b == b'\'';
    SHELL_VARIABLE
        .find_iter(content)
        .filter(|m| {
            let before = m.start().checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(m.end()).copied();
            !before.is_some_and(is_quote) && !after.is_some_and(is_quote)
        })
        .count()
}

/// `$(...)` not immediately followed by a quote.
fn unquoted_substitution(content: &str) -> bool {
    let bytes = content.as_bytes();
    COMMAND_SUBSTITUTION
        .find_iter(content)
        .any(|m| !matches!(bytes.get(m.end()), Some(b'"') | Some(b'\'')))
}

/// `rm -rf /` where the slash does not start a path component.
fn rm_rf_root(content: &str) -> bool {
    let bytes = content.as_bytes();
    RM_RF.find_iter(content).any(|m| {
        !bytes
            .get(m.end())
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    })
}

fn python(content: &str) -> Assessment {
    let mut a = Assessment::default();
    a.concern_if(
        matches(r"subprocess\.(run|call|Popen)\s*\([^)]*shell\s*=\s*True", content),
        "subprocess with shell=True (command injection risk)",
    );
    a.safe_if(
        matches(r"subprocess\.(run|call|Popen)\s*\(\s*\[", content),
        "Using subprocess with list arguments (safe)",
    );
    a.concern_if(matches(r"\beval\s*\(", content), "eval() usage (code injection risk)");
    a.concern_if(matches(r"\bexec\s*\(", content), "exec() usage (code injection risk)");
    a.concern_if(
        matches(r"pickle\.loads?\s*\(", content),
        "pickle.load() usage (arbitrary code execution risk)",
    );
    a.concern_if(
        matches(r"os\.system\s*\(", content),
        "os.system() usage (command injection risk)",
    );
    a.concern_if(
        matches(r#"open\s*\([^)]*\+["']"#, content),
        "File opened in read+write mode (potential security risk)",
    );
    a.safe_if(
        matches(r"os\.path\.abspath|os\.path\.realpath", content),
        "Path normalization used (prevents traversal attacks)",
    );
    a.safe_if(
        matches(r"shlex\.quote|re\.escape", content),
        "Input sanitization found",
    );
    a.concern_if(
        hardcoded_literal(&PASSWORD_LITERAL, content),
        "Possible hardcoded password",
    );
    a.concern_if(
        hardcoded_literal(&API_KEY_LITERAL, content),
        "Possible hardcoded API key",
    );
    a
}

fn bash(content: &str) -> Assessment {
    let mut a = Assessment::default();
    let unquoted = unquoted_variables(content);
    a.concern_if(
        unquoted > 5,
        format!("Many unquoted variables ({} found) - injection risk", unquoted),
    );
    a.concern_if(matches(r"\beval\s+", content), "eval usage (code injection risk)");
    let quoted = count(r#""\$\w+""#, content);
    a.safe_if(
        quoted > 5,
        format!("Good variable quoting ({} quoted variables)", quoted),
    );
    a.safe_if(matches(r"\$\{[^}]+\}", content), "Using ${var} syntax");
    a.concern_if(unquoted_substitution(content), "Unquoted command substitution");
    a.concern_if(rm_rf_root(content), "Dangerous rm -rf on root paths");
    a.safe_if(
        matches(r"set\s+-u|set\s+-[a-z]*u", content),
        "Using set -u (undefined variable protection)",
    );
    a.safe_if(
        matches(r"if\s+\[\[.*\]\]\s*;\s*then", content),
        "Conditional validation before execution",
    );
    a
}

fn r(content: &str) -> Assessment {
    let mut a = Assessment::default();
    a.concern_if(matches(r"\beval\s*\(", content), "eval() usage (code injection risk)");
    a.concern_if(
        matches(r"\bparse\s*\([^)]*text\s*=", content),
        "parse() with text argument (code injection risk)",
    );
    a.concern_if(
        matches(r"\bsystem\s*\(", content),
        "system() call (command injection risk)",
    );
    a.safe_if(
        matches(r"\bsystem2\s*\(", content),
        "Using system2() instead of system()",
    );
    a.concern_if(
        matches(r"\bsource\s*\([^)]*paste|sprintf", content),
        "source() with dynamic path (code injection risk)",
    );
    a.concern_if(
        matches(r"\bload\s*\(", content),
        "load() usage (arbitrary code execution risk)",
    );
    a.safe_if(
        matches(r"file\.exists\s*\(", content),
        "File existence validation",
    );
    a.safe_if(
        matches(r"normalizePath|path\.expand", content),
        "Path normalization used",
    );
    a.concern_if(
        matches(r#"(?i)password\s*<-\s*["'][^"']{8,}["']"#, content),
        "Possible hardcoded password",
    );
    a
}

fn generic(content: &str) -> Assessment {
    let mut a = Assessment::default();
    a.concern_if(matches(r"\beval\s*\(", content), "eval() usage detected");
    a.concern_if(matches(r"\bexec\s*\(", content), "exec() usage detected");
    a
}

/// Security findings for a script of the given language.
pub(crate) fn assess(content: &str, script_type: ScriptType) -> Assessment {
    match script_type {
        ScriptType::Python => python(content),
        ScriptType::Bash => bash(content),
        ScriptType::R => r(content),
        _ => generic(content),
    }
}

/// Warns about injection risks and hardcoded secrets.
pub struct SecurityCheck;

impl Check<WrapperContext> for SecurityCheck {
    fn id(&self) -> CheckId {
        CheckId::new("security")
    }

    fn name(&self) -> &str {
        "Security"
    }

    fn description(&self) -> &str {
        "Warns about injection risks, dangerous commands and hardcoded secrets"
    }

    fn run(&self, _target: &Target, ctx: &mut WrapperContext) -> anyhow::Result<Vec<Issue>> {
        let (content, script_type) = match ctx.script("security", "security check") {
            Ok(script) => script,
            Err(issue) => return Ok(vec![issue]),
        };
        let assessment = assess(content, script_type);

        let mut issues: Vec<Issue> = assessment
            .concerns
            .iter()
            .map(|c| {
                Issue::warning(format!("Security concern: {}", c))
                    .with_context("Review and mitigate potential security risks")
            })
            .collect();
        if !assessment.safe.is_empty() {
            issues.push(Issue::info(format!(
                "Found {} secure coding pattern(s)",
                assessment.safe.len()
            )));
        }
        if assessment.concerns.is_empty() {
            issues.push(Issue::info(if assessment.safe.is_empty() {
                "No obvious security issues detected"
            } else {
                "No obvious security issues detected, good security practices found"
            }));
        }
        Ok(issues)
    }
}
