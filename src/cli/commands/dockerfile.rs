//! The `gplint dockerfile` command.

use crate::cli::args::DockerfileArgs;
use crate::config::Settings;
use crate::dockerfile::{self, DockerOptions};
use crate::error::Result;
use crate::lint::{IssueStyle, OutputFormat};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit, rejected, Rendering, SpinnerObserver};

/// Lints, builds and optionally runs a Dockerfile.
pub struct DockerfileCommand {
    args: DockerfileArgs,
    settings: Settings,
    output: OutputFormat,
}

impl DockerfileCommand {
    pub fn new(args: DockerfileArgs, settings: Settings, output: OutputFormat) -> Self {
        Self {
            args,
            settings,
            output,
        }
    }

    fn options(&self) -> DockerOptions {
        DockerOptions {
            tag: self.args.tag.clone(),
            command: self.args.cmd.clone(),
            no_cleanup: self.args.no_cleanup,
            no_build: self.args.no_build,
        }
    }
}

impl Command for DockerfileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validation = {
            let mut observer = SpinnerObserver::new(&mut *ui);
            dockerfile::validate(&self.args.path, &self.options(), &self.settings, &mut observer)
        };
        let validation = match validation {
            Ok(v) => v,
            Err(e) => return rejected(ui, e),
        };

        let rendering = Rendering {
            output: self.output,
            format: dockerfile::FORMAT,
            noun: dockerfile::NOUN,
            style: IssueStyle::Context,
        };
        emit(ui, &rendering, &[validation])
    }
}
