//! Installation hints keyed by requirement identifier.
//!
//! Hints are looked up by key, never matched against rendered error text.

/// Installation hint for a known requirement.
pub struct InstallHint {
    /// Requirement identifier this hint applies to.
    pub requirement: &'static str,
    /// One-line install instructions.
    pub instructions: &'static str,
}

/// Built-in hint table for the standard registry.
const HINTS: &[InstallHint] = &[
    InstallHint {
        requirement: "brew",
        instructions: "Install Homebrew: /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"",
    },
    InstallHint {
        requirement: "choco",
        instructions: "Install Chocolatey: https://chocolatey.org/install",
    },
    InstallHint {
        requirement: "git",
        instructions: "Install Git: https://git-scm.com/downloads",
    },
    InstallHint {
        requirement: "node",
        instructions: "Install Node.js 18 or later: https://nodejs.org (or `brew install node`)",
    },
    InstallHint {
        requirement: "uv",
        instructions: "Install uv: curl -LsSf https://astral.sh/uv/install.sh | sh",
    },
    InstallHint {
        requirement: "jupyter",
        instructions: "Install Jupyter: uv tool install jupyterlab",
    },
    InstallHint {
        requirement: "code",
        instructions: "Install Visual Studio Code: https://code.visualstudio.com/download",
    },
];

/// Look up the built-in install hint for a requirement identifier.
pub fn install_hint(requirement: &str) -> Option<&'static str> {
    HINTS
        .iter()
        .find(|h| h.requirement == requirement)
        .map(|h| h.instructions)
}
