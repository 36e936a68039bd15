//! Command-line interface for gplint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    ArtifactFormat, ChecksArgs, Cli, Commands, CompletionsArgs, DockerfileArgs,
    DocumentationArgs, GpunitArgs, ManifestArgs, ParamgroupsArgs, WrapperArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
