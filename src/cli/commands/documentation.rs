//! The `gplint documentation` command.

use crate::cli::args::DocumentationArgs;
use crate::config::Settings;
use crate::documentation;
use crate::error::Result;
use crate::lint::{IssueStyle, OutputFormat};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit, rejected, Rendering, SpinnerObserver};

/// Checks documentation mentions the module and its parameters.
pub struct DocumentationCommand {
    args: DocumentationArgs,
    settings: Settings,
    output: OutputFormat,
}

impl DocumentationCommand {
    pub fn new(args: DocumentationArgs, settings: Settings, output: OutputFormat) -> Self {
        Self {
            args,
            settings,
            output,
        }
    }
}

impl Command for DocumentationCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validation = {
            let mut observer = SpinnerObserver::new(&mut *ui);
            documentation::validate(
                &self.args.input,
                self.args.module.clone(),
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
            format: documentation::FORMAT,
            noun: documentation::NOUN,
            style: IssueStyle::Context,
        };
        emit(ui, &rendering, &[validation])
    }
}
