//! Configuration schema types.
//!
//! All fields are optional with sensible defaults: a project without a
//! config file gets the built-in registry and the default setup/debug
//! commands.

use serde::{Deserialize, Serialize};

/// Root configuration structure (`.agentlab.yml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lab name shown in headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Custom requirements, appended to or overriding the built-ins by name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<RequirementConfig>,

    /// Environment setup steps.
    pub setup: SetupConfig,

    /// Remote debugger launch.
    pub debug: DebugConfig,
}

/// A custom requirement declared in project config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementConfig {
    /// Requirement identifier.
    pub name: String,

    /// Display name (defaults to the identifier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Binary to probe (defaults to the identifier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Version probe arguments.
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,

    /// Minimum version, `MAJOR.MINOR[.PATCH...]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,

    /// Optional tools warn instead of erroring.
    #[serde(default)]
    pub optional: bool,

    /// Install hint shown when this requirement fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

/// Environment setup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Ordered steps, each a named shell command.
    pub steps: Vec<SetupStep>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            steps: vec![
                SetupStep {
                    name: "Create virtual environment".to_string(),
                    command: "uv venv".to_string(),
                },
                SetupStep {
                    name: "Install dependencies".to_string(),
                    command: "uv sync".to_string(),
                },
            ],
        }
    }
}

/// One setup step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupStep {
    /// Step name shown while running.
    pub name: String,
    /// Shell command to execute.
    pub command: String,
}

/// Remote debugger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Command template; `${port}` is substituted from `--port`.
    pub command: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            command: "uipath run --debug --port ${port}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_setup_steps() {
        let config = Config::default();
        assert_eq!(config.setup.steps.len(), 2);
        assert_eq!(config.setup.steps[0].command, "uv venv");
        assert_eq!(config.setup.steps[1].command, "uv sync");
    }

    #[test]
    fn default_debug_command_has_port_placeholder() {
        let config = Config::default();
        assert!(config.debug.command.contains("${port}"));
    }

    #[test]
    fn parses_minimal_yaml() {
        let config: Config = serde_yaml::from_str("app_name: Policy Lab\n").unwrap();
        assert_eq!(config.app_name.as_deref(), Some("Policy Lab"));
        assert!(config.requirements.is_empty());
        // Defaults fill the rest
        assert_eq!(config.setup.steps.len(), 2);
    }

    #[test]
    fn parses_custom_requirements() {
        let yaml = r#"
requirements:
  - name: docker
    display: Docker
    min_version: "24.0"
  - name: ghost
    command: definitely-not-a-tool
    optional: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.requirements.len(), 2);
        assert_eq!(config.requirements[0].display.as_deref(), Some("Docker"));
        assert_eq!(
            config.requirements[0].version_args,
            vec!["--version".to_string()]
        );
        assert!(config.requirements[1].optional);
    }

    #[test]
    fn parses_setup_and_debug_overrides() {
        let yaml = r#"
setup:
  steps:
    - name: Sync
      command: uv sync --frozen
debug:
  command: "uipath run --debug --port ${port} --profile lab"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.setup.steps.len(), 1);
        assert!(config.debug.command.contains("--profile lab"));
    }

    #[test]
    fn round_trips_through_yaml() {
        let config = Config {
            app_name: Some("Lab".to_string()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.app_name.as_deref(), Some("Lab"));
    }
}
