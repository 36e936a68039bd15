//! The `gplint wrapper` command.

use crate::cli::args::WrapperArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::lint::{IssueStyle, OutputFormat};
use crate::ui::UserInterface;
use crate::wrapper;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit, rejected, Rendering, SpinnerObserver};

/// Validates a wrapper script.
pub struct WrapperCommand {
    args: WrapperArgs,
    settings: Settings,
    output: OutputFormat,
}

impl WrapperCommand {
    pub fn new(args: WrapperArgs, settings: Settings, output: OutputFormat) -> Self {
        Self {
            args,
            settings,
            output,
        }
    }
}

impl Command for WrapperCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validation = {
            let mut observer = SpinnerObserver::new(&mut *ui);
            wrapper::validate(
                &self.args.path,
                self.args.parameters.clone(),
                &self.settings,
                &mut observer,
            )
        };
        let validation = match validation {
            Ok(v) => v,
            Err(e) => return rejected(ui, e),
        };

        let rendering = Rendering {
            output: self.output,
            format: wrapper::FORMAT,
            noun: wrapper::NOUN,
            style: IssueStyle::Context,
        };
        emit(ui, &rendering, &[validation])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn json_output_lists_every_check() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.pl");
        fs::write(&path, "#!/usr/bin/perl\nmy $input = shift;\nprint $input;\n").unwrap();

        let mut ui = MockUI::new();
        let result = WrapperCommand::new(
            WrapperArgs {
                path,
                parameters: Some(vec!["input".into()]),
            },
            Settings::default(),
            OutputFormat::Json,
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        let report: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(report["format"], "wrapper");
        assert_eq!(report["passed"], true);
        let checks: Vec<_> = report["issues"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i["check"].as_str())
            .collect();
        assert!(checks.contains(&"file-validation"));
        assert!(checks.contains(&"security"));
    }
}
