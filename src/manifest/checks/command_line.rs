//! commandLine sanity.

use crate::lint::{Check, CheckId, Issue, Target};
use crate::manifest::ManifestContext;

/// The command line must be non-empty and should reference parameters.
pub struct CommandLineCheck;

impl Check<ManifestContext> for CommandLineCheck {
    fn id(&self) -> CheckId {
        CheckId::new("command-line")
    }

    fn name(&self) -> &str {
        "Command Line"
    }

    fn description(&self) -> &str {
        "Validates commandLine is non-empty and looks like a command"
    }

    fn run(&self, _target: &Target, ctx: &mut ManifestContext) -> anyhow::Result<Vec<Issue>> {
        let doc = match ctx.document("commandLine") {
            Ok(doc) => doc,
            Err(issue) => return Ok(vec![issue]),
        };

        let Some(entry) = doc.get("commandLine") else {
            return Ok(vec![]);
        };

        if entry.value.is_empty() {
            return Ok(vec![Issue::error("commandLine field is present but empty")
                .at_line(entry.line_no, &entry.line)]);
        }
        if !entry.value.contains(['<', '>', ' ']) {
            return Ok(vec![Issue::warning(
                "commandLine does not contain any parameter references (<param.name>) or spaces. \
                 This may be incorrect.",
            )
            .at_line(entry.line_no, &entry.line)]);
        }
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use crate::manifest::checks::run_on;

    #[test]
    fn accepts_parameterized_command() {
        assert!(run_on(&CommandLineCheck, "commandLine=<wrapper.py> <input.file>\n").is_empty());
    }

    #[test]
    fn empty_is_error() {
        let issues = run_on(&CommandLineCheck, "commandLine=\n");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn single_token_is_warning() {
        let issues = run_on(&CommandLineCheck, "commandLine=run.sh\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn absent_is_left_to_required_keys() {
        assert!(run_on(&CommandLineCheck, "name=Foo\n").is_empty());
    }
}
