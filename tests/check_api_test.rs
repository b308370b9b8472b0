//! Library-level tests for the checker pipeline.
//!
//! These exercise the public API end to end with a scripted probe: the
//! registry, the runner's classification rules, the version comparator's
//! leniency, and the accumulated summary.

use agentlab::platform::{check_macos, check_windows, classify_windows_build};
use agentlab::requirements::{
    Requirement, RequirementRegistry, RequirementRunner, RunSummary, ScriptedProbe, Severity,
};
use agentlab::requirements::version::{extract_version, satisfies_minimum};

#[test]
fn no_minimum_passes_iff_tool_resolves() {
    let probe = ScriptedProbe::new().with_tool("jupyter", "jupyter core: 5.7.2");
    let runner = RequirementRunner::new(&probe);

    let present = runner.check(&Requirement::new("jupyter", "Jupyter", "jupyter"));
    assert_eq!(present.severity, Severity::Pass);

    let absent = runner.check(&Requirement::new("gitx", "gitx", "gitx"));
    assert_eq!(absent.severity, Severity::Error);
}

#[test]
fn equal_version_satisfies_minimum() {
    let probe = ScriptedProbe::new().with_tool("node", "14.0");
    let runner = RequirementRunner::new(&probe);
    let req = Requirement::new("node", "Node.js", "node").with_min("14.0");

    assert_eq!(runner.check(&req).severity, Severity::Pass);
}

#[test]
fn lower_version_on_required_tool_is_error() {
    let probe = ScriptedProbe::new().with_tool("node", "13.9");
    let runner = RequirementRunner::new(&probe);
    let req = Requirement::new("node", "Node.js", "node").with_min("14.0");

    let result = runner.check(&req);
    assert_eq!(result.severity, Severity::Error);
    assert!(result.message.contains("13.9"));
    assert!(result.message.contains("14.0"));
}

#[test]
fn unparseable_version_output_never_errors() {
    // `echo --version` prints nothing version-like; the lenient policy
    // passes the check rather than failing a working tool.
    let probe = ScriptedProbe::new().with_tool("echo", "--version");
    let runner = RequirementRunner::new(&probe);
    let req = Requirement::new("echo", "echo", "echo").with_min("999.0");

    let result = runner.check(&req);
    assert_eq!(result.severity, Severity::Pass);
    assert!(result.message.contains("version unknown"));
}

#[test]
fn optional_tool_missing_warns_without_erroring() {
    let probe = ScriptedProbe::new();
    let runner = RequirementRunner::new(&probe);
    let req = Requirement::new("code", "Visual Studio Code", "code").optional();

    let mut summary = RunSummary::new();
    summary.record(runner.check(&req));

    assert!(summary.errors.is_empty());
    assert_eq!(summary.warnings.len(), 1);
    assert!(summary.is_success());
}

#[test]
fn missing_required_tool_end_to_end() {
    let probe = ScriptedProbe::new();
    let runner = RequirementRunner::new(&probe);
    let requirements = vec![Requirement::new("gitx", "gitx", "gitx")];

    let mut summary = RunSummary::new();
    runner.check_all(&requirements, &mut summary);

    assert_eq!(summary.total, 1);
    assert_eq!(summary.passed, 0);
    assert_eq!(summary.errors, vec!["gitx: Not installed"]);
    assert!(summary.warnings.is_empty());
    assert!(!summary.is_success());
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn standard_registry_run_with_everything_installed() {
    use agentlab::platform::Platform;

    let probe = ScriptedProbe::new()
        .with_tool("apt-get", "apt 2.7.14 (amd64)")
        .with_tool("git", "git version 2.43.0")
        .with_tool("node", "v20.11.1")
        .with_tool("uv", "uv 0.5.9")
        .with_tool("jupyter", "jupyter core: 5.7.2")
        .with_tool("code", "1.96.2");
    let runner = RequirementRunner::new(&probe);
    let registry = RequirementRegistry::standard(Platform::Linux);

    let mut summary = RunSummary::new();
    runner.check_all(registry.iter(), &mut summary);

    assert_eq!(summary.total, registry.len());
    assert_eq!(summary.passed, registry.len());
    assert!(summary.is_success());
}

#[test]
fn version_extraction_matches_common_banners() {
    assert_eq!(
        extract_version("git version 2.34.1"),
        Some("2.34.1".to_string())
    );
    assert_eq!(extract_version("v18.17.0"), Some("18.17.0".to_string()));
    assert_eq!(extract_version("no digits here"), None);
}

#[test]
fn version_comparison_is_segmentwise_numeric() {
    assert!(satisfies_minimum("14.0", "14.0"));
    assert!(!satisfies_minimum("13.9", "14.0"));
    assert!(satisfies_minimum("2.10", "2.9"));
    // Equal prefix with no further segments satisfies
    assert!(satisfies_minimum("14.0", "14.0.1"));
}

#[test]
fn windows_build_thresholds() {
    assert_eq!(classify_windows_build(10240).severity, Severity::Pass);
    assert_eq!(classify_windows_build(9600).severity, Severity::Error);
    assert!(classify_windows_build(22631).message.contains("Windows 11"));
    assert!(classify_windows_build(19045).message.contains("Windows 10"));
}

#[test]
fn windows_ver_banner_parses_build() {
    let check = check_windows("Microsoft Windows [Version 10.0.19045.3803]");
    assert_eq!(check.result.severity, Severity::Pass);
    assert!(check.result.message.contains("Windows 10"));
}

#[test]
fn macos_major_version_gate() {
    assert_eq!(check_macos("14.5").result.severity, Severity::Pass);
    assert_eq!(check_macos("11.7").result.severity, Severity::Error);
}
