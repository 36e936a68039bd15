//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The six format commands share
//! [`report`] for progress display and rendering, so every format prints
//! the same `PASS:`/`FAIL:` contract and exits the same way.

pub mod checks;
pub mod completions;
pub mod dispatcher;
pub mod dockerfile;
pub mod documentation;
pub mod gpunit;
pub mod manifest;
pub mod paramgroups;
pub mod report;
pub mod wrapper;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
