//! Terminal UI implementation.

use std::io::Write;

use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, Theme};
use super::{SpinnerHandle, UserInterface};

/// Writes reports to stdout and progress to stderr.
pub struct TerminalUI {
    use_color: bool,
    show_progress: bool,
}

impl TerminalUI {
    /// Create a terminal UI.
    ///
    /// Progress spinners are only drawn when stderr is a terminal and
    /// `progress` is requested.
    pub fn new(color: bool, progress: bool) -> Self {
        Self {
            use_color: color && should_use_colors(),
            show_progress: progress && console::Term::stderr().is_term(),
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{}", msg).is_err() {
            tracing::debug!("stdout closed while writing report");
        }
    }

    fn error(&mut self, msg: &str) {
        self.message(&format!("ERROR: {}", msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.show_progress {
            let theme = if self.use_color {
                Theme::new()
            } else {
                Theme::plain()
            };
            Box::new(ProgressSpinner::new(message, theme))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn use_color(&self) -> bool {
        self.use_color
    }
}
