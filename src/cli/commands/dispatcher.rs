//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Failures that stop validation before any check runs are reported
    /// through `ui` and yield a failing [`CommandResult`]; `Err` is left for
    /// infrastructure problems.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher; settings are discovered in `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Directory searched for `.gplint.yml`.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn settings(&self, cli: &Cli) -> Result<Settings> {
        load_settings(cli.config.as_deref(), &self.working_dir)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let output = cli.format;
        match &cli.command {
            Commands::Manifest(args) => {
                let cmd = super::manifest::ManifestCommand::new(args.clone(), output);
                cmd.execute(ui)
            }
            Commands::Gpunit(args) => {
                let cmd =
                    super::gpunit::GpunitCommand::new(args.clone(), self.settings(cli)?, output);
                cmd.execute(ui)
            }
            Commands::Paramgroups(args) => {
                let cmd = super::paramgroups::ParamgroupsCommand::new(args.clone(), output);
                cmd.execute(ui)
            }
            Commands::Dockerfile(args) => {
                let cmd = super::dockerfile::DockerfileCommand::new(
                    args.clone(),
                    self.settings(cli)?,
                    output,
                );
                cmd.execute(ui)
            }
            Commands::Documentation(args) => {
                let cmd = super::documentation::DocumentationCommand::new(
                    args.clone(),
                    self.settings(cli)?,
                    output,
                );
                cmd.execute(ui)
            }
            Commands::Wrapper(args) => {
                let cmd =
                    super::wrapper::WrapperCommand::new(args.clone(), self.settings(cli)?, output);
                cmd.execute(ui)
            }
            Commands::Checks(args) => {
                let cmd = super::checks::ChecksCommand::new(args.clone(), self.settings(cli)?);
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.working_dir(), Path::new("/test"));
    }

    #[test]
    fn unparseable_settings_are_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gplint.yml"), "timeouts: [oops\n").unwrap();
        let cli = Cli::try_parse_from(["gplint", "checks", "wrapper"]).unwrap();

        let mut ui = MockUI::new();
        let err = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config at"));
    }

    #[test]
    fn manifest_needs_no_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gplint.yml"), "timeouts: [oops\n").unwrap();
        let cli = Cli::try_parse_from(["gplint", "manifest", "/no/such/manifest"]).unwrap();

        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.errors(),
            ["File or directory does not exist: '/no/such/manifest'".to_string()]
        );
    }
}
