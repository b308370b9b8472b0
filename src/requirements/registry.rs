//! Requirement definitions and the ordered registry.
//!
//! The registry holds the built-in lab prerequisites plus any custom
//! requirements from project config. Order matters: checks run strictly
//! sequentially in declared order, so the registry is a vector, not a map.

use crate::config::RequirementConfig;
use crate::platform::Platform;

/// A declared tool dependency with an optional minimum version.
#[derive(Debug, Clone)]
pub struct Requirement {
    /// Requirement identifier (e.g., "node"), used for hint lookup and `--only`.
    pub name: String,
    /// Display name used in messages (e.g., "Node.js").
    pub display: String,
    /// Binary probed on the search path.
    pub command: String,
    /// Arguments for the version probe invocation.
    pub version_args: Vec<String>,
    /// Minimum version of the form `MAJOR.MINOR[.PATCH...]`, when declared.
    pub min_version: Option<String>,
    /// Optional tools downgrade failures from error to warning.
    pub optional: bool,
    /// Install hint overriding the built-in hint table.
    pub hint: Option<String>,
}

impl Requirement {
    /// Create a requirement probing `command --version` with no minimum.
    pub fn new(name: &str, display: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            display: display.to_string(),
            command: command.to_string(),
            version_args: vec!["--version".to_string()],
            min_version: None,
            optional: false,
            hint: None,
        }
    }

    /// Declare a minimum version.
    pub fn with_min(mut self, min_version: &str) -> Self {
        self.min_version = Some(min_version.to_string());
        self
    }

    /// Mark the requirement as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Ordered registry of all requirements to check.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    requirements: Vec<Requirement>,
}

impl RequirementRegistry {
    /// Create the standard lab registry for a platform.
    ///
    /// The package manager entry is platform-specific: Homebrew on macOS,
    /// Chocolatey on Windows, APT (advisory only) elsewhere.
    pub fn standard(platform: Platform) -> Self {
        let package_manager = match platform {
            Platform::MacOS => Requirement::new("brew", "Homebrew", "brew"),
            Platform::Windows => Requirement::new("choco", "Chocolatey", "choco"),
            Platform::Linux => Requirement::new("apt-get", "APT", "apt-get").optional(),
        };

        let requirements = vec![
            package_manager,
            Requirement::new("git", "Git", "git").with_min("2.30"),
            Requirement::new("node", "Node.js", "node").with_min("18.0"),
            Requirement::new("uv", "uv package manager", "uv").with_min("0.4"),
            Requirement::new("jupyter", "Jupyter", "jupyter"),
            Requirement::new("code", "Visual Studio Code", "code").optional(),
        ];

        Self { requirements }
    }

    /// Create an empty registry (custom-only setups and tests).
    pub fn empty() -> Self {
        Self {
            requirements: Vec::new(),
        }
    }

    /// Merge custom requirements from project config.
    ///
    /// A custom entry with a built-in name replaces it in place, keeping the
    /// declared check order; new names append after the built-ins.
    pub fn with_custom(mut self, custom: &[RequirementConfig]) -> Self {
        for config in custom {
            let requirement = Requirement {
                name: config.name.clone(),
                display: config.display.clone().unwrap_or_else(|| config.name.clone()),
                command: config.command.clone().unwrap_or_else(|| config.name.clone()),
                version_args: config.version_args.clone(),
                min_version: config.min_version.clone(),
                optional: config.optional,
                hint: config.hint.clone(),
            };

            match self.requirements.iter().position(|r| r.name == config.name) {
                Some(idx) => self.requirements[idx] = requirement,
                None => self.requirements.push(requirement),
            }
        }
        self
    }

    /// Look up a requirement by name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }

    /// Iterate requirements in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    /// Requirements in declared order, restricted to `only` when non-empty.
    pub fn selected(&self, only: &[String]) -> Vec<&Requirement> {
        self.requirements
            .iter()
            .filter(|r| only.is_empty() || only.iter().any(|name| name == &r.name))
            .collect()
    }

    /// Number of registered requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the registry has no requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
