//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use gplint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("PASS: Manifest 'manifest' passed all validation checks.");
//! ui.error("File or directory does not exist: 'nope'");
//!
//! assert_eq!(ui.messages().len(), 1);
//! assert!(ui.errors()[0].contains("nope"));
//! ```

use std::sync::{Arc, Mutex};

use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    spinners: Arc<Mutex<Vec<String>>>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages written to the report stream.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Errors reported before a pipeline ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Final line of every spinner that was finished.
    pub fn spinner_results(&self) -> Vec<String> {
        self.spinners
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Everything written to the report stream, joined by newlines.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(MockSpinner {
            results: Arc::clone(&self.spinners),
        })
    }

    fn use_color(&self) -> bool {
        false
    }
}

/// Spinner that records how it finished.
#[derive(Debug)]
pub struct MockSpinner {
    results: Arc<Mutex<Vec<String>>>,
}

impl MockSpinner {
    fn record(&self, line: String) {
        if let Ok(mut results) = self.results.lock() {
            results.push(line);
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.record(format!("success: {}", msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        self.record(format!("warning: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.record(format!("error: {}", msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_and_errors() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.message("two");
        ui.error("bad");

        assert_eq!(ui.output(), "one\ntwo");
        assert_eq!(ui.errors(), ["bad".to_string()]);
    }

    #[test]
    fn records_spinner_outcomes() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Running file-name");
        spinner.finish_error("file-name");
        let mut spinner = ui.start_spinner("Running required-keys");
        spinner.finish_success("required-keys");

        assert_eq!(
            ui.spinner_results(),
            vec!["error: file-name", "success: required-keys"]
        );
    }
}
