//! Tool resolution and version probing.
//!
//! Shelling out to external tools is inherently environment-dependent, so
//! the checker talks to the machine through the [`ToolProbe`] capability:
//! resolve a binary on the search path, and capture its version output.
//! [`SystemProbe`] is the real implementation; [`ScriptedProbe`] returns
//! canned output per tool name for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{AgentlabError, Result};

/// Capability interface for locating tools and capturing their version output.
pub trait ToolProbe {
    /// Resolve a tool's binary on the search path.
    fn resolve(&self, tool: &str) -> Option<PathBuf>;

    /// Invoke the tool with version-reporting arguments and capture its
    /// combined stdout and stderr as free text.
    fn capture(&self, tool: &str, args: &[String]) -> Result<String>;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command — `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let candidates: Vec<String> = if cfg!(windows) {
        vec![
            tool.to_string(),
            format!("{}.exe", tool),
            format!("{}.cmd", tool),
            format!("{}.bat", tool),
        ]
    } else {
        vec![tool.to_string()]
    };

    for dir in path_entries {
        for name in &candidates {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Probe implementation backed by the real search path and process spawning.
pub struct SystemProbe {
    path_entries: Vec<PathBuf>,
}

impl SystemProbe {
    /// Create a probe over the current process's PATH.
    pub fn new() -> Self {
        Self {
            path_entries: parse_system_path(),
        }
    }

    /// Create a probe over an explicit list of directories (for tests).
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolProbe for SystemProbe {
    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        let resolved = resolve_tool_path(tool, &self.path_entries);
        match &resolved {
            Some(path) => tracing::debug!("resolved {} at {}", tool, path.display()),
            None => tracing::debug!("{} not found on search path", tool),
        }
        resolved
    }

    fn capture(&self, tool: &str, args: &[String]) -> Result<String> {
        let binary = self
            .resolve(tool)
            .unwrap_or_else(|| PathBuf::from(tool));

        let output = Command::new(&binary)
            .args(args)
            .output()
            .map_err(|e| AgentlabError::ProbeFailed {
                tool: tool.to_string(),
                message: e.to_string(),
            })?;

        // Some tools print their version to stderr, so keep both streams.
        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}

/// Probe implementation returning canned output per tool name.
///
/// Tools not registered are unresolvable; tools registered as broken
/// resolve but fail to produce output, exercising the lenient
/// version-unknown path.
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    outputs: HashMap<String, String>,
    broken: Vec<String>,
}

impl ScriptedProbe {
    /// Create an empty probe where every tool is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool with canned version output.
    pub fn with_tool(mut self, tool: &str, output: &str) -> Self {
        self.outputs.insert(tool.to_string(), output.to_string());
        self
    }

    /// Register a tool that resolves but whose probe invocation fails.
    pub fn with_broken_tool(mut self, tool: &str) -> Self {
        self.broken.push(tool.to_string());
        self
    }
}

impl ToolProbe for ScriptedProbe {
    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        if self.outputs.contains_key(tool) || self.broken.iter().any(|t| t == tool) {
            Some(PathBuf::from("/usr/local/bin").join(tool))
        } else {
            None
        }
    }

    fn capture(&self, tool: &str, _args: &[String]) -> Result<String> {
        if let Some(output) = self.outputs.get(tool) {
            return Ok(output.clone());
        }
        Err(AgentlabError::ProbeFailed {
            tool: tool.to_string(),
            message: "scripted failure".to_string(),
        })
    }
}
