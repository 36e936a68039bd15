//! External program execution.

pub mod command;

pub use command::{display_command, execute, CommandOptions, CommandResult};
