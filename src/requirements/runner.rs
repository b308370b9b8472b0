//! Requirement runner: probe, classify, accumulate.
//!
//! The runner never raises: every failure path produces a classified
//! [`CheckResult`]. Missing tools and version mismatches are results, and a
//! probe invocation that itself fails collapses into the version-unknown
//! pass, the same leniency applied to unparseable output.

use crate::requirements::probe::ToolProbe;
use crate::requirements::registry::Requirement;
use crate::requirements::summary::{CheckResult, RunSummary, Severity};
use crate::requirements::version::{check_version, extract_version, VersionCheck};

/// Checks requirements one at a time against a [`ToolProbe`].
pub struct RequirementRunner<'a> {
    probe: &'a dyn ToolProbe,
}

impl<'a> RequirementRunner<'a> {
    /// Create a runner over the given probe.
    pub fn new(probe: &'a dyn ToolProbe) -> Self {
        Self { probe }
    }

    /// Check a single requirement, classifying the outcome.
    pub fn check(&self, requirement: &Requirement) -> CheckResult {
        if self.probe.resolve(&requirement.command).is_none() {
            return self.missing(requirement);
        }

        // Probe the version even without a declared minimum so the report
        // can show what's installed. Capture failures leave it unknown.
        let output = self
            .probe
            .capture(&requirement.command, &requirement.version_args)
            .ok();

        let Some(minimum) = &requirement.min_version else {
            let version = output.as_deref().and_then(extract_version);
            return self.pass(requirement, version);
        };

        match output.as_deref().map(|text| check_version(text, minimum)) {
            Some(VersionCheck::Satisfies(version)) => self.pass(requirement, Some(version)),
            Some(VersionCheck::Below(version)) => self.below_minimum(requirement, version, minimum),
            Some(VersionCheck::Unknown) | None => {
                tracing::debug!(
                    "no version pattern in {} output; passing unverified",
                    requirement.command
                );
                self.unknown_version(requirement)
            }
        }
    }

    /// Check several requirements in order, recording into `summary`.
    pub fn check_all<'r>(
        &self,
        requirements: impl IntoIterator<Item = &'r Requirement>,
        summary: &mut RunSummary,
    ) {
        for requirement in requirements {
            summary.record(self.check(requirement));
        }
    }

    fn missing(&self, requirement: &Requirement) -> CheckResult {
        let (severity, suffix) = if requirement.optional {
            (Severity::Warning, " (optional)")
        } else {
            (Severity::Error, "")
        };
        CheckResult {
            requirement: requirement.name.clone(),
            display: requirement.display.clone(),
            found: false,
            version: None,
            severity,
            message: format!("{}: Not installed{}", requirement.display, suffix),
        }
    }

    fn pass(&self, requirement: &Requirement, version: Option<String>) -> CheckResult {
        let message = match &version {
            Some(v) => format!("{} {}", requirement.display, v),
            None => requirement.display.clone(),
        };
        CheckResult {
            requirement: requirement.name.clone(),
            display: requirement.display.clone(),
            found: true,
            version,
            severity: Severity::Pass,
            message,
        }
    }

    fn unknown_version(&self, requirement: &Requirement) -> CheckResult {
        CheckResult {
            requirement: requirement.name.clone(),
            display: requirement.display.clone(),
            found: true,
            version: None,
            severity: Severity::Pass,
            message: format!("{}: found (version unknown)", requirement.display),
        }
    }

    fn below_minimum(
        &self,
        requirement: &Requirement,
        version: String,
        minimum: &str,
    ) -> CheckResult {
        let severity = if requirement.optional {
            Severity::Warning
        } else {
            Severity::Error
        };
        let message = format!(
            "{}: version {} is below the required {}",
            requirement.display, version, minimum
        );
        CheckResult {
            requirement: requirement.name.clone(),
            display: requirement.display.clone(),
            found: true,
            version: Some(version),
            severity,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::probe::ScriptedProbe;
    use crate::requirements::registry::Requirement;

    fn check_with(probe: &ScriptedProbe, requirement: &Requirement) -> CheckResult {
        RequirementRunner::new(probe).check(requirement)
    }

    #[test]
    fn missing_required_tool_is_error() {
        let probe = ScriptedProbe::new();
        let req = Requirement::new("gitx", "gitx", "gitx");

        let result = check_with(&probe, &req);

        assert!(!result.found);
        assert_eq!(result.severity, Severity::Error);
        assert_eq!(result.message, "gitx: Not installed");
    }

    #[test]
    fn missing_optional_tool_is_warning() {
        let probe = ScriptedProbe::new();
        let req = Requirement::new("code", "Visual Studio Code", "code").optional();

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(
            result.message,
            "Visual Studio Code: Not installed (optional)"
        );
    }

    #[test]
    fn found_without_minimum_passes() {
        let probe = ScriptedProbe::new().with_tool("jupyter", "jupyter core: 5.7.2");
        let req = Requirement::new("jupyter", "Jupyter", "jupyter");

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Pass);
        assert_eq!(result.version.as_deref(), Some("5.7.2"));
    }

    #[test]
    fn equal_version_satisfies_minimum() {
        let probe = ScriptedProbe::new().with_tool("node", "v14.0");
        let req = Requirement::new("node", "Node.js", "node").with_min("14.0");

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Pass);
        assert_eq!(result.version.as_deref(), Some("14.0"));
    }

    #[test]
    fn lower_version_is_error_with_both_versions_in_message() {
        let probe = ScriptedProbe::new().with_tool("node", "v13.9");
        let req = Requirement::new("node", "Node.js", "node").with_min("14.0");

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Error);
        assert!(result.message.contains("13.9"));
        assert!(result.message.contains("14.0"));
    }

    #[test]
    fn lower_version_on_optional_tool_is_warning() {
        let probe = ScriptedProbe::new().with_tool("code", "1.2");
        let req = Requirement::new("code", "Visual Studio Code", "code")
            .with_min("1.80")
            .optional();

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Warning);
    }

    #[test]
    fn unparseable_output_passes_as_version_unknown() {
        let probe = ScriptedProbe::new().with_tool("echo", "some banner with no numbers");
        let req = Requirement::new("echo", "echo", "echo").with_min("999.0");

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Pass);
        assert!(result.version.is_none());
        assert!(result.message.contains("version unknown"));
    }

    #[test]
    fn failed_probe_invocation_passes_as_version_unknown() {
        let probe = ScriptedProbe::new().with_broken_tool("node");
        let req = Requirement::new("node", "Node.js", "node").with_min("18.0");

        let result = check_with(&probe, &req);

        assert_eq!(result.severity, Severity::Pass);
        assert!(result.message.contains("version unknown"));
    }

    #[test]
    fn check_all_threads_the_summary() {
        let probe = ScriptedProbe::new().with_tool("git", "git version 2.39.1");
        let requirements = vec![
            Requirement::new("git", "Git", "git").with_min("2.30"),
            Requirement::new("gitx", "gitx", "gitx"),
        ];
        let runner = RequirementRunner::new(&probe);
        let mut summary = RunSummary::new();

        runner.check_all(&requirements, &mut summary);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.errors, vec!["gitx: Not installed"]);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn every_requirement_produces_exactly_one_result() {
        let probe = ScriptedProbe::new();
        let requirements = vec![
            Requirement::new("a", "a", "a"),
            Requirement::new("b", "b", "b").optional(),
            Requirement::new("c", "c", "c"),
        ];
        let runner = RequirementRunner::new(&probe);
        let mut summary = RunSummary::new();

        runner.check_all(&requirements, &mut summary);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.results.len(), 3);
    }
}
