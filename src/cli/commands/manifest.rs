//! The `gplint manifest` command.

use crate::cli::args::ManifestArgs;
use crate::error::Result;
use crate::lint::{IssueStyle, OutputFormat};
use crate::manifest;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit, rejected, Rendering, SpinnerObserver};

/// Validates a module manifest.
pub struct ManifestCommand {
    args: ManifestArgs,
    output: OutputFormat,
}

impl ManifestCommand {
    pub fn new(args: ManifestArgs, output: OutputFormat) -> Self {
        Self { args, output }
    }
}

impl Command for ManifestCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validation = {
            let mut observer = SpinnerObserver::new(&mut *ui);
            manifest::validate(&self.args.path, &mut observer)
        };
        let validation = match validation {
            Ok(v) => v,
            Err(e) => return rejected(ui, e),
        };

        let rendering = Rendering {
            output: self.output,
            format: manifest::FORMAT,
            noun: manifest::NOUN,
            style: IssueStyle::Line,
        };
        emit(ui, &rendering, &[validation])
    }
}
