//! Check command implementation.
//!
//! `agentlab check` runs the platform probe and every registered
//! requirement strictly in order, accumulates a [`RunSummary`], renders the
//! report, and exits non-zero when the error list is non-empty.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::platform::{check_platform, Platform};
use crate::report;
use crate::requirements::{
    CheckResult, RequirementRegistry, RequirementRunner, RunSummary, Severity, SystemProbe,
    ToolProbe,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Run the checks against an injected probe (the testing seam).
    pub fn execute_with_probe(
        &self,
        probe: &dyn ToolProbe,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let registry =
            RequirementRegistry::standard(Platform::current()).with_custom(&config.requirements);
        let runner = RequirementRunner::new(probe);
        let mut summary = RunSummary::new();

        if !self.args.json {
            let app_name = config.app_name.as_deref().unwrap_or("Agent Lab");
            ui.show_header(&format!("{} - Prerequisites", app_name));
        }

        // Platform check runs first; `--only os` selects it explicitly.
        let include_os = self.args.only.is_empty() || self.args.only.iter().any(|n| n == "os");
        if include_os {
            let check = if self.args.json {
                check_platform(probe)
            } else {
                let mut spinner = ui.start_spinner("Checking operating system");
                let check = check_platform(probe);
                finish_spinner(spinner.as_mut(), &check.result);
                check
            };
            // The unrecognized-platform advisory counts as passed but still
            // belongs in the warning list.
            if let Some(advisory) = check.advisory {
                summary.add_warning(advisory);
            }
            summary.record(check.result);
        }

        for requirement in registry.selected(&self.args.only) {
            let result = self.run_one(ui, &requirement.display, || runner.check(requirement));
            summary.record(result);
        }

        if self.args.json {
            println!("{}", report::render_json(&summary)?);
        } else {
            report::render(&summary, &registry, ui);
        }

        if summary.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(summary.exit_code()))
        }
    }

    fn run_one(
        &self,
        ui: &mut dyn UserInterface,
        label: &str,
        run: impl FnOnce() -> CheckResult,
    ) -> CheckResult {
        if self.args.json {
            return run();
        }
        let mut spinner = ui.start_spinner(&format!("Checking {}", label));
        let result = run();
        finish_spinner(spinner.as_mut(), &result);
        result
    }
}

fn finish_spinner(spinner: &mut dyn crate::ui::SpinnerHandle, result: &CheckResult) {
    match result.severity {
        Severity::Pass => spinner.finish_success(&result.message),
        Severity::Warning => spinner.finish_warning(&result.message),
        Severity::Error => spinner.finish_error(&result.message),
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = SystemProbe::new();
        self.execute_with_probe(&probe, ui)
    }
}
