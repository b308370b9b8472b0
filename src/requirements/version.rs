//! Version extraction and dotted-numeric comparison.
//!
//! Probe output has no guaranteed format, so extraction is lenient: the
//! first dotted-numeric substring wins, and output with no such substring
//! leaves the version unknown (which passes — a deliberate policy, since a
//! tool that resolved on the path but prints an unparseable banner is more
//! likely fine than broken).
//!
//! Comparison is plain segment-by-segment numeric ordering, not semver:
//! pre-release and build metadata never make it through extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Matches the first dotted-numeric substring (two or more digit groups).
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)+").expect("static pattern compiles"))
}

/// Extract the installed version from free-text probe output.
///
/// Returns the first substring like `14.0` or `2.34.1`, or `None` when the
/// output contains no dotted-numeric token at all.
pub fn extract_version(output: &str) -> Option<String> {
    version_pattern()
        .find(output)
        .map(|m| m.as_str().to_string())
}

/// Whether `installed` satisfies the `required` minimum.
///
/// Segments are compared numerically left to right. The first unequal
/// segment decides. When all compared segments are equal and one side runs
/// out, the installed version satisfies — there is no implicit zero padding
/// beyond the compared length, so `"2"` satisfies `"2.30"`.
pub fn satisfies_minimum(installed: &str, required: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> { v.split('.').filter_map(|s| s.parse().ok()).collect() };

    let installed_parts = parse(installed);
    let required_parts = parse(required);

    for (i, r) in installed_parts.iter().zip(required_parts.iter()) {
        if i > r {
            return true;
        }
        if i < r {
            return false;
        }
    }

    true
}

/// Outcome of matching probe output against a declared minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// No dotted-numeric token in the output.
    Unknown,
    /// Extracted version meets the minimum.
    Satisfies(String),
    /// Extracted version is below the minimum.
    Below(String),
}

/// Extract a version from `output` and compare it against `minimum`.
pub fn check_version(output: &str, minimum: &str) -> VersionCheck {
    match extract_version(output) {
        None => VersionCheck::Unknown,
        Some(version) => {
            if satisfies_minimum(&version, minimum) {
                VersionCheck::Satisfies(version)
            } else {
                VersionCheck::Below(version)
            }
        }
    }
}
