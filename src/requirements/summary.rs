//! Check result and run summary types.
//!
//! Each requirement check produces exactly one [`CheckResult`], immutable
//! after creation. Results accumulate into a [`RunSummary`] that is threaded
//! through the runner explicitly and read once at the end to render the
//! report and decide the exit status.

use serde::Serialize;

/// Severity classification of a single check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Tool found and any declared minimum is satisfied (or unverifiable).
    Pass,
    /// Non-blocking problem: optional tool missing or below minimum.
    Warning,
    /// Blocking problem: required tool missing or below minimum.
    Error,
}

/// The result of checking a single requirement.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Requirement identifier (e.g., "node").
    pub requirement: String,
    /// Display name (e.g., "Node.js").
    pub display: String,
    /// Whether the tool resolved on the search path.
    pub found: bool,
    /// Installed version extracted from the probe output, when one parsed.
    pub version: Option<String>,
    /// Pass / warning / error classification.
    pub severity: Severity,
    /// Human-readable outcome, also used in the warning/error lists.
    pub message: String,
}

impl CheckResult {
    /// Whether this result counts toward the passed total.
    pub fn is_pass(&self) -> bool {
        self.severity == Severity::Pass
    }
}

/// Aggregate counters and message lists for a full prerequisite pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Number of checks performed.
    pub total: usize,
    /// Number of checks that passed.
    pub passed: usize,
    /// Ordered warning messages.
    pub warnings: Vec<String>,
    /// Ordered error messages.
    pub errors: Vec<String>,
    /// Every individual result, in check order.
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check result, updating counters and message lists.
    pub fn record(&mut self, result: CheckResult) {
        self.total += 1;
        match result.severity {
            Severity::Pass => self.passed += 1,
            Severity::Warning => self.warnings.push(result.message.clone()),
            Severity::Error => self.errors.push(result.message.clone()),
        }
        self.results.push(result);
    }

    /// Add an advisory warning not tied to a failed check (e.g., the
    /// unrecognized-platform notice, which still counts as passed).
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Overall outcome: success iff the error list is empty.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit code for this summary.
    ///
    /// The source scripts printed a failure banner without setting an exit
    /// status; here a non-empty error list is an explicit non-zero exit.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
