//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{should_use_colors, LabTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// Terminal UI for interactive and CI usage.
///
/// When non-interactive (CI, piped output), confirms resolve to their
/// defaults and spinners are hidden so logs stay clean.
pub struct TerminalUI {
    term: Term,
    theme: LabTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            LabTheme::new()
        } else {
            LabTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            interactive,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.is_interactive() {
            return Ok(default);
        }
        let answer = dialoguer::Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.interactive && self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(PlainSpinner::new(message, self.mode))
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive && self.term.is_term()
    }
}

/// Spinner stand-in for non-interactive runs: one line per finished check.
struct PlainSpinner {
    theme: LabTheme,
    mode: OutputMode,
}

impl PlainSpinner {
    fn new(_message: &str, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            LabTheme::new()
        } else {
            LabTheme::plain()
        };
        Self { theme, mode }
    }

    fn emit(&self, line: String) {
        if self.mode.shows_status() {
            println!("{}", line);
        }
    }
}

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.emit(self.theme.format_success(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        self.emit(self.theme.format_warning(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        // Errors print even in silent mode
        println!("{}", self.theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.emit(self.theme.format_skipped(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_confirm_returns_default() {
        let mut ui = TerminalUI::new(false, OutputMode::Silent);
        assert!(ui.confirm("Proceed?", true).unwrap());
        assert!(!ui.confirm("Proceed?", false).unwrap());
    }

    #[test]
    fn non_interactive_spinner_is_plain() {
        let mut ui = TerminalUI::new(false, OutputMode::Silent);
        let mut spinner = ui.start_spinner("Checking Git");
        spinner.finish_success("Git 2.39.1");
    }
}
