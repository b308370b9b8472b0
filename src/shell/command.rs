//! Shell command execution.

use crate::error::{AgentlabError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when inherited).
    pub stdout: String,

    /// Captured standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

fn shell_binary() -> &'static str {
    if cfg!(windows) {
        "cmd"
    } else {
        "sh"
    }
}

fn shell_flag() -> &'static str {
    if cfg!(windows) {
        "/C"
    } else {
        "-c"
    }
}

/// Execute a shell command, capturing stdout and stderr.
///
/// A non-zero exit is a normal `Ok` result with `success == false`; only a
/// spawn failure is an `Err`.
pub fn execute(command: &str, cwd: Option<&Path>) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_binary());
    cmd.arg(shell_flag());
    cmd.arg(command);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let output = cmd.output().map_err(|_| AgentlabError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Execute a shell command with inherited stdio.
///
/// Used for long-running interactive processes (the debugger): output goes
/// straight to the terminal and the call blocks until the process exits.
pub fn execute_interactive(command: &str, cwd: Option<&Path>) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_binary());
    cmd.arg(shell_flag());
    cmd.arg(command);
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd.stdin(Stdio::inherit());
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let status = cmd.status().map_err(|_| AgentlabError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    Ok(CommandOutput {
        exit_code: status.code(),
        stdout: String::new(),
        stderr: String::new(),
        duration: start.elapsed(),
        success: status.success(),
    })
}
