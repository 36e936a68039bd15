//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait separating the report stream from progress
//! - [`TerminalUI`] writing reports to stdout and spinners to stderr
//! - [`MockUI`] capturing output in tests
//!
//! stdout only ever carries the report contract (`PASS:`/`FAIL:` lines,
//! issues, `ERROR:` lines and the batch summary). Everything else goes to
//! stderr.

pub mod mock;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write a line (or block of lines) to the report stream.
    fn message(&mut self, msg: &str);

    /// Report a failure that prevented validation, as `ERROR: <msg>`.
    fn error(&mut self, msg: &str);

    /// Start a progress spinner.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Whether report output may be styled.
    fn use_color(&self) -> bool;
}

/// Handle to a running spinner.
pub trait SpinnerHandle {
    /// Update the spinner text.
    fn set_message(&mut self, msg: &str);

    /// Stop with a success line.
    fn finish_success(&mut self, msg: &str);

    /// Stop with a warning line.
    fn finish_warning(&mut self, msg: &str);

    /// Stop with an error line.
    fn finish_error(&mut self, msg: &str);
}
