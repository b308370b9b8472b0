//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::LabTheme;
use super::SpinnerHandle;

/// A progress spinner for a single check or setup step.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .expect("static template parses"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        Self { bar }
    }

    fn finish(&mut self, msg: String) {
        self.bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .expect("static template parses"),
        );
        self.bar.finish_with_message(msg);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let theme = LabTheme::new();
        self.finish(theme.format_success(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        let theme = LabTheme::new();
        self.finish(theme.format_warning(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = LabTheme::new();
        self.finish(theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        let theme = LabTheme::new();
        self.finish(theme.format_skipped(msg));
    }
}
