//! Shared plumbing for the validation commands.
//!
//! A [`SpinnerObserver`] shows one spinner per running check on stderr, and
//! [`emit`] renders finished validations to the report stream in the
//! selected [`OutputFormat`].

use crate::error::{LintError, Result};
use crate::lint::{
    CheckId, Issue, IssueStyle, JsonFormatter, OutputFormat, PipelineObserver, Report,
    ReportFormatter, Severity, TextFormatter, Validation,
};
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::CommandResult;

/// Shows a spinner per check and finishes it with the check's outcome.
pub struct SpinnerObserver<'a> {
    ui: &'a mut dyn UserInterface,
    current: Option<Box<dyn SpinnerHandle>>,
}

impl<'a> SpinnerObserver<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui, current: None }
    }
}

impl PipelineObserver for SpinnerObserver<'_> {
    fn check_started(&mut self, check: &CheckId, name: &str) {
        self.current = Some(self.ui.start_spinner(&format!("{} ({})", name, check)));
    }

    fn check_finished(&mut self, check: &CheckId, issues: &[Issue]) {
        let Some(mut spinner) = self.current.take() else {
            return;
        };
        let errors = issues.iter().filter(|i| i.is_error()).count();
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();
        if errors > 0 {
            spinner.finish_error(&format!("{}: {} error(s)", check, errors));
        } else if warnings > 0 {
            spinner.finish_warning(&format!("{}: {} warning(s)", check, warnings));
        } else {
            spinner.finish_success(&format!("{}: passed", check));
        }
    }
}

/// What a command knows about the reports it is about to print.
pub struct Rendering<'a> {
    pub output: OutputFormat,
    pub format: &'a str,
    pub noun: &'a str,
    pub style: IssueStyle,
}

impl Rendering<'_> {
    fn report<'r>(&'r self, validation: &'r Validation) -> Report<'r> {
        Report {
            format: self.format,
            noun: self.noun,
            target: validation.target.to_string(),
            style: self.style,
            result: &validation.result,
        }
    }
}

/// Print `validations` and turn their verdict into an exit code.
pub fn emit(
    ui: &mut dyn UserInterface,
    rendering: &Rendering<'_>,
    validations: &[Validation],
) -> Result<CommandResult> {
    let reports: Vec<Report<'_>> = validations.iter().map(|v| rendering.report(v)).collect();

    let mut buf = Vec::new();
    match rendering.output {
        OutputFormat::Text => TextFormatter::new(ui.use_color()).write_batch(&reports, &mut buf)?,
        OutputFormat::Json => JsonFormatter::new().write_batch(&reports, &mut buf)?,
    }
    ui.message(String::from_utf8_lossy(&buf).trim_end());

    if validations.iter().all(|v| v.result.passed) {
        Ok(CommandResult::success())
    } else {
        Ok(CommandResult::failure(1))
    }
}

/// Report a failure that stopped validation before any check ran.
pub fn rejected(ui: &mut dyn UserInterface, err: LintError) -> Result<CommandResult> {
    tracing::debug!("Validation did not start: {:?}", err);
    ui.error(&err.to_string());
    Ok(CommandResult::failure(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Finding, PipelineResult, Target};
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn validation(passed: bool) -> Validation {
        let issue = if passed {
            Issue::info("fine")
        } else {
            Issue::error("broken")
        };
        Validation {
            target: Target::File(PathBuf::from("pg/paramgroups.json")),
            result: PipelineResult {
                passed,
                findings: vec![Finding {
                    check: CheckId::new("structure"),
                    issue,
                }],
            },
        }
    }

    fn rendering(output: OutputFormat) -> Rendering<'static> {
        Rendering {
            output,
            format: "paramgroups",
            noun: "Paramgroups file",
            style: IssueStyle::Context,
        }
    }

    #[test]
    fn passing_report_exits_zero() {
        let mut ui = MockUI::new();
        let result = emit(&mut ui, &rendering(OutputFormat::Text), &[validation(true)]).unwrap();
        assert!(result.success);
        assert_eq!(
            ui.output(),
            "PASS: Paramgroups file 'pg/paramgroups.json' passed all validation checks."
        );
    }

    #[test]
    fn failing_report_exits_one() {
        let mut ui = MockUI::new();
        let result = emit(&mut ui, &rendering(OutputFormat::Text), &[validation(false)]).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.output().contains("ERROR: broken"));
    }

    #[test]
    fn json_report_is_parseable() {
        let mut ui = MockUI::new();
        emit(&mut ui, &rendering(OutputFormat::Json), &[validation(false)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["format"], "paramgroups");
        assert_eq!(value["passed"], false);
        assert_eq!(value["issues"][0]["check"], "structure");
    }

    #[test]
    fn rejection_prints_error_and_exits_one() {
        let mut ui = MockUI::new();
        let result = rejected(
            &mut ui,
            LintError::FileNotFound {
                path: PathBuf::from("run.sh"),
            },
        )
        .unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors(), ["File does not exist: 'run.sh'"]);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn observer_finishes_one_spinner_per_check() {
        let mut ui = MockUI::new();
        {
            let mut observer = SpinnerObserver::new(&mut ui);
            let id = CheckId::new("json-structure");
            observer.check_started(&id, "JSON Structure");
            observer.check_finished(&id, &[Issue::warning("odd")]);
            let id = CheckId::new("group-names");
            observer.check_started(&id, "Group Names");
            observer.check_finished(&id, &[]);
        }
        assert_eq!(
            ui.spinner_results(),
            vec![
                "warning: json-structure: 1 warning(s)",
                "success: group-names: passed"
            ]
        );
    }
}
