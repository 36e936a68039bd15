//! The `gplint paramgroups` command.

use crate::cli::args::ParamgroupsArgs;
use crate::error::Result;
use crate::lint::{IssueStyle, OutputFormat};
use crate::paramgroups;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit, rejected, Rendering, SpinnerObserver};

/// Validates a parameter-group descriptor.
pub struct ParamgroupsCommand {
    args: ParamgroupsArgs,
    output: OutputFormat,
}

impl ParamgroupsCommand {
    pub fn new(args: ParamgroupsArgs, output: OutputFormat) -> Self {
        Self { args, output }
    }
}

impl Command for ParamgroupsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validation = {
            let mut observer = SpinnerObserver::new(&mut *ui);
            paramgroups::validate(&self.args.path, self.args.parameters.clone(), &mut observer)
        };
        let validation = match validation {
            Ok(v) => v,
            Err(e) => return rejected(ui, e),
        };

        let rendering = Rendering {
            output: self.output,
            format: paramgroups::FORMAT,
            noun: paramgroups::NOUN,
            style: IssueStyle::Context,
        };
        emit(ui, &rendering, &[validation])
    }
}
