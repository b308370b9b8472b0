//! Report rendering.
//!
//! Purely presentational: the renderer reads a finished [`RunSummary`] and
//! writes the totals, the error and warning blocks, the installation hints
//! for failed requirements, and the final banner. It owns no state and
//! never mutates the summary.

pub mod hints;

pub use hints::install_hint;

use crate::requirements::registry::RequirementRegistry;
use crate::requirements::summary::{RunSummary, Severity};
use crate::ui::UserInterface;

/// Render the human-readable report for a completed run.
pub fn render(summary: &RunSummary, registry: &RequirementRegistry, ui: &mut dyn UserInterface) {
    ui.message("");
    ui.message(&format!(
        "Checks: {} total, {} passed",
        summary.total, summary.passed
    ));

    if !summary.errors.is_empty() {
        ui.message("");
        ui.message("Errors:");
        for error in &summary.errors {
            ui.error(error);
        }
    }

    if !summary.warnings.is_empty() {
        ui.message("");
        ui.message("Warnings:");
        for warning in &summary.warnings {
            ui.warning(warning);
        }
    }

    let hint_lines = failed_hints(summary, registry);
    if !hint_lines.is_empty() {
        ui.message("");
        ui.message("To install missing tools:");
        for hint in hint_lines {
            ui.show_hint(&hint);
        }
    }

    ui.message("");
    if summary.is_success() {
        ui.success("All prerequisites satisfied.");
    } else {
        ui.error("Some critical prerequisites are missing. Fix the errors above and re-run `agentlab check`.");
    }
}

/// Render the machine-readable report.
pub fn render_json(summary: &RunSummary) -> crate::error::Result<String> {
    serde_json::to_string_pretty(summary).map_err(|e| anyhow::Error::from(e).into())
}

/// Collect install hints for requirements in the error list.
///
/// A custom hint declared on the requirement wins over the built-in table.
fn failed_hints(summary: &RunSummary, registry: &RequirementRegistry) -> Vec<String> {
    summary
        .results
        .iter()
        .filter(|r| r.severity == Severity::Error)
        .filter_map(|r| {
            registry
                .get(&r.requirement)
                .and_then(|req| req.hint.clone())
                .or_else(|| install_hint(&r.requirement).map(String::from))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::requirements::summary::CheckResult;
    use crate::ui::MockUI;

    fn failed_result(name: &str, message: &str) -> CheckResult {
        CheckResult {
            requirement: name.to_string(),
            display: name.to_string(),
            found: false,
            version: None,
            severity: Severity::Error,
            message: message.to_string(),
        }
    }

    fn passed_result(name: &str) -> CheckResult {
        CheckResult {
            requirement: name.to_string(),
            display: name.to_string(),
            found: true,
            version: Some("1.0.0".to_string()),
            severity: Severity::Pass,
            message: format!("{} 1.0.0", name),
        }
    }

    #[test]
    fn renders_totals_and_success_banner() {
        let mut summary = RunSummary::new();
        summary.record(passed_result("git"));
        let registry = RequirementRegistry::empty();
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(ui.has_message("Checks: 1 total, 1 passed"));
        assert!(ui.has_success("All prerequisites satisfied."));
        assert!(!ui.has_message("Errors:"));
        assert!(!ui.has_message("Warnings:"));
    }

    #[test]
    fn renders_error_block_and_failure_banner() {
        let mut summary = RunSummary::new();
        summary.record(failed_result("git", "Git: Not installed"));
        let registry = RequirementRegistry::standard(Platform::Linux);
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(ui.has_message("Errors:"));
        assert!(ui.has_error("Git: Not installed"));
        assert!(ui.has_error("Some critical prerequisites are missing"));
    }

    #[test]
    fn error_block_only_rendered_when_non_empty() {
        let summary = RunSummary::new();
        let registry = RequirementRegistry::empty();
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(!ui.has_message("Errors:"));
    }

    #[test]
    fn warning_block_renders_warnings() {
        let mut summary = RunSummary::new();
        summary.add_warning("Unrecognized platform; operating system version check skipped");
        let registry = RequirementRegistry::empty();
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(ui.has_message("Warnings:"));
        assert!(ui.has_warning("Unrecognized platform"));
        // Warnings alone don't fail the run
        assert!(ui.has_success("All prerequisites satisfied."));
    }

    #[test]
    fn hints_keyed_by_failed_requirement() {
        let mut summary = RunSummary::new();
        summary.record(failed_result("git", "Git: Not installed"));
        let registry = RequirementRegistry::standard(Platform::Linux);
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(ui.has_hint("https://git-scm.com"));
    }

    #[test]
    fn custom_hint_wins_over_builtin() {
        use crate::config::RequirementConfig;

        let mut summary = RunSummary::new();
        summary.record(failed_result("git", "Git: Not installed"));
        let registry = RequirementRegistry::standard(Platform::Linux).with_custom(&[
            RequirementConfig {
                name: "git".to_string(),
                display: None,
                command: None,
                version_args: vec!["--version".to_string()],
                min_version: None,
                optional: false,
                hint: Some("Ask IT to install Git".to_string()),
            },
        ]);
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(ui.has_hint("Ask IT to install Git"));
        assert!(!ui.has_hint("git-scm.com"));
    }

    #[test]
    fn no_hint_for_unknown_failed_requirement() {
        let mut summary = RunSummary::new();
        summary.record(failed_result("gitx", "gitx: Not installed"));
        let registry = RequirementRegistry::empty();
        let mut ui = MockUI::new();

        render(&summary, &registry, &mut ui);

        assert!(ui.hints().is_empty());
        assert!(!ui.has_message("To install missing tools:"));
    }

    #[test]
    fn json_report_includes_results() {
        let mut summary = RunSummary::new();
        summary.record(failed_result("git", "Git: Not installed"));

        let json = render_json(&summary).unwrap();
        assert!(json.contains("\"severity\": \"error\""));
        assert!(json.contains("Git: Not installed"));
    }
}
