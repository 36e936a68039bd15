//! The `gplint gpunit` command.
//!
//! Accepts a single `.yml` file or a directory; a directory is validated
//! file by file and closes with a `SUMMARY:` line.

use crate::cli::args::GpunitArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::gpunit::{self, Expectations};
use crate::lint::{IssueStyle, OutputFormat};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit, rejected, Rendering, SpinnerObserver};

/// Validates GPUnit test definitions.
pub struct GpunitCommand {
    args: GpunitArgs,
    settings: Settings,
    output: OutputFormat,
}

impl GpunitCommand {
    pub fn new(args: GpunitArgs, settings: Settings, output: OutputFormat) -> Self {
        Self {
            args,
            settings,
            output,
        }
    }

    fn expectations(&self) -> Expectations {
        Expectations {
            module: self.args.module.clone(),
            parameters: self.args.parameters.clone(),
            types: self.args.types.clone(),
        }
    }
}

impl Command for GpunitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validations = {
            let mut observer = SpinnerObserver::new(&mut *ui);
            gpunit::validate(
                &self.args.path,
                &self.expectations(),
                &self.settings,
                &mut observer,
            )
        };
        let validations = match validations {
            Ok(v) => v,
            Err(e) => return rejected(ui, e),
        };

        let rendering = Rendering {
            output: self.output,
            format: gpunit::FORMAT,
            noun: gpunit::NOUN,
            style: IssueStyle::Context,
        };
        emit(ui, &rendering, &validations)
    }
}
