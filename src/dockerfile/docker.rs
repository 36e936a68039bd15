//! Thin wrapper over the `docker` command line.

use std::path::Path;
use std::time::Duration;

use crate::config::Settings;
use crate::error::Result;
use crate::shell::{display_command, execute, CommandOptions, CommandResult};

/// Invokes the Docker CLI with per-operation timeouts.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
    build_timeout: Duration,
    run_timeout: Duration,
}

impl DockerCli {
    pub fn new(program: impl Into<String>, build_timeout: Duration, run_timeout: Duration) -> Self {
        Self {
            program: program.into(),
            build_timeout,
            run_timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.tools.docker.clone(),
            settings.timeouts.docker_build(),
            settings.timeouts.docker_run(),
        )
    }

    pub fn build_timeout(&self) -> Duration {
        self.build_timeout
    }

    pub fn run_timeout(&self) -> Duration {
        self.run_timeout
    }

    /// `docker version --format {{.Server.Version}}`
    pub fn version(&self) -> Result<CommandResult> {
        self.exec(
            &["version", "--format", "{{.Server.Version}}"],
            CommandOptions::with_timeout(self.run_timeout),
        )
    }

    /// `docker build -t <tag> -f <dockerfile> <context>`, run inside `context`.
    pub fn build(&self, tag: &str, dockerfile: &Path, context: &Path) -> Result<CommandResult> {
        let file = dockerfile.to_string_lossy();
        let dir = context.to_string_lossy();
        let options = CommandOptions {
            cwd: Some(context.to_path_buf()),
            timeout: Some(self.build_timeout),
        };
        self.exec(&["build", "-t", tag, "-f", &*file, &*dir], options)
    }

    /// Run `command` under `sh -lc` in a throwaway container of `tag`.
    pub fn run_shell(&self, tag: &str, command: &str) -> Result<CommandResult> {
        self.exec(
            &["run", "--rm", "--entrypoint", "sh", tag, "-lc", command],
            CommandOptions::with_timeout(self.run_timeout),
        )
    }

    /// `docker rmi <tag>`
    pub fn remove_image(&self, tag: &str) -> Result<CommandResult> {
        self.exec(&["rmi", tag], CommandOptions::with_timeout(self.run_timeout))
    }

    /// How a call with `args` is shown in messages.
    pub fn render(&self, args: &[&str]) -> String {
        display_command(&self.program, args)
    }

    fn exec(&self, args: &[&str], options: CommandOptions) -> Result<CommandResult> {
        execute(&self.program, args, &options)
    }
}
