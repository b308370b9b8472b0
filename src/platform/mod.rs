//! Operating system detection and minimum-release checking.
//!
//! The platform check runs first, before any tool requirement. Windows is
//! gated on a build number, macOS on the leading product-version component.
//! Unrecognized platforms get an advisory warning and count as passed —
//! an unknown OS never blocks setup.

use crate::requirements::probe::ToolProbe;
use crate::requirements::summary::{CheckResult, Severity};
use crate::requirements::version::extract_version;

/// Minimum supported Windows build.
pub const MIN_WINDOWS_BUILD: u64 = 10240;

/// First build reported as Windows 11.
pub const WINDOWS_11_BUILD: u64 = 22000;

/// Minimum supported macOS major version.
pub const MIN_MACOS_MAJOR: u64 = 12;

/// Platform family the checker is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Outcome of the platform check.
///
/// The advisory carries the unrecognized-platform (or unreadable-version)
/// notice: it lands in the warning list while the check itself still counts
/// as passed.
#[derive(Debug, Clone)]
pub struct PlatformCheck {
    pub result: CheckResult,
    pub advisory: Option<String>,
}

/// Check the executing operating system against the minimum release bar.
pub fn check_platform(probe: &dyn ToolProbe) -> PlatformCheck {
    match Platform::current() {
        Platform::Windows => {
            match probe.capture("cmd", &["/c".to_string(), "ver".to_string()]) {
                Ok(output) => check_windows(&output),
                Err(_) => unverifiable("could not read the Windows version"),
            }
        }
        Platform::MacOS => match probe.capture("sw_vers", &["-productVersion".to_string()]) {
            Ok(output) => check_macos(&output),
            Err(_) => unverifiable("could not read the macOS version"),
        },
        Platform::Linux => PlatformCheck {
            result: os_result(
                Severity::Pass,
                None,
                "Operating system: unrecognized platform".to_string(),
            ),
            advisory: Some(
                "Unrecognized platform; operating system version check skipped".to_string(),
            ),
        },
    }
}

/// Classify Windows from `ver` output like
/// `Microsoft Windows [Version 10.0.22631.3155]`.
pub fn check_windows(ver_output: &str) -> PlatformCheck {
    let Some(version) = extract_version(ver_output) else {
        return unverifiable("could not parse the Windows version");
    };
    let build = version.split('.').nth(2).and_then(|s| s.parse::<u64>().ok());
    match build {
        Some(build) => PlatformCheck {
            result: classify_windows_build(build),
            advisory: None,
        },
        None => unverifiable("could not parse the Windows build number"),
    }
}

/// Classify a Windows build number against the fixed thresholds.
pub fn classify_windows_build(build: u64) -> CheckResult {
    if build >= WINDOWS_11_BUILD {
        os_result(
            Severity::Pass,
            Some(build.to_string()),
            format!("Windows 11 (build {})", build),
        )
    } else if build >= MIN_WINDOWS_BUILD {
        os_result(
            Severity::Pass,
            Some(build.to_string()),
            format!("Windows 10 (build {})", build),
        )
    } else {
        os_result(
            Severity::Error,
            Some(build.to_string()),
            format!(
                "Operating system: Windows build {} is below the supported minimum ({})",
                build, MIN_WINDOWS_BUILD
            ),
        )
    }
}

/// Classify macOS from `sw_vers -productVersion` output like `14.5`.
pub fn check_macos(version_output: &str) -> PlatformCheck {
    let Some(version) = extract_version(version_output) else {
        return unverifiable("could not parse the macOS version");
    };
    let major = version
        .split('.')
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    let result = if major >= MIN_MACOS_MAJOR {
        os_result(
            Severity::Pass,
            Some(version.clone()),
            format!("macOS {}", version),
        )
    } else {
        os_result(
            Severity::Error,
            Some(version.clone()),
            format!(
                "Operating system: macOS {} is below the supported minimum (macOS {})",
                version, MIN_MACOS_MAJOR
            ),
        )
    };
    PlatformCheck {
        result,
        advisory: None,
    }
}

fn unverifiable(reason: &str) -> PlatformCheck {
    PlatformCheck {
        result: os_result(
            Severity::Pass,
            None,
            "Operating system: version unknown".to_string(),
        ),
        advisory: Some(format!(
            "Operating system version check skipped: {}",
            reason
        )),
    }
}

fn os_result(severity: Severity, version: Option<String>, message: String) -> CheckResult {
    CheckResult {
        requirement: "os".to_string(),
        display: "Operating system".to_string(),
        found: true,
        version,
        severity,
        message,
    }
}
