//! Setup command implementation.
//!
//! `agentlab setup` shells out to the lab tooling in declared order:
//! create the virtual environment, then install dependencies. Steps come
//! from project config when present. Strictly sequential, one attempt per
//! step, no retries; the first failing step stops the run.

use std::path::{Path, PathBuf};

use crate::cli::args::SetupArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::shell;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, args: SetupArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let app_name = config.app_name.as_deref().unwrap_or("Agent Lab");
        ui.show_header(&format!("{} - Environment setup", app_name));

        let steps = &config.setup.steps;
        if steps.is_empty() {
            ui.message("No setup steps configured.");
            return Ok(CommandResult::success());
        }

        for step in steps {
            ui.message(&format!("  {} ({})", step.name, step.command));
        }
        ui.message("");

        if self.args.dry_run {
            ui.message("dry-run mode: no commands executed");
            return Ok(CommandResult::success());
        }

        if !self.args.yes && !ui.confirm("Run environment setup now?", true)? {
            ui.message("Setup cancelled.");
            return Ok(CommandResult::failure(1));
        }

        for step in steps {
            let mut spinner = ui.start_spinner(&step.name);
            match shell::execute(&step.command, Some(&self.project_root)) {
                Ok(output) if output.success => {
                    spinner.finish_success(&step.name);
                }
                Ok(output) => {
                    spinner.finish_error(&format!("{} failed", step.name));
                    ui.message(&format!("Command: {}", step.command));
                    for line in output.stdout.lines().chain(output.stderr.lines()) {
                        ui.message(line);
                    }
                    return Ok(CommandResult::failure(output.exit_code.unwrap_or(1)));
                }
                Err(e) => {
                    spinner.finish_error(&format!("{} failed", step.name));
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(1));
                }
            }
        }

        ui.success("Environment setup complete.");
        Ok(CommandResult::success())
    }
}
