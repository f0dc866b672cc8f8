//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use wp_version_check::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Latest WordPress version: 6.4.2");
//! ui.warning("NOK : /srv/www/old (6.3)");
//!
//! assert!(ui.has_message("6.4.2"));
//! assert_eq!(ui.warnings().len(), 1);
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Which `UserInterface` method produced a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Message,
    Success,
    Warning,
    Error,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<(LineKind, String)>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    fn of_kind(&self, kind: LineKind) -> Vec<String> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Every captured stdout line in order (messages, successes, warnings).
    pub fn stdout(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|(k, _)| *k != LineKind::Error)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.of_kind(LineKind::Message)
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> Vec<String> {
        self.of_kind(LineKind::Success)
    }

    /// Get all captured warning lines.
    pub fn warnings(&self) -> Vec<String> {
        self.of_kind(LineKind::Warning)
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<String> {
        self.of_kind(LineKind::Error)
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.spinners.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push((LineKind::Message, msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push((LineKind::Success, msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push((LineKind::Warning, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push((LineKind::Error, msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner that records nothing.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finished: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the spinner was finished.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_and_clear(&mut self) {
        self.finished = true;
    }
}
