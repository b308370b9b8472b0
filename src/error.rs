//! Error types for agentlab operations.
//!
//! This module defines [`AgentlabError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AgentlabError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `AgentlabError::Other`) for unexpected errors
//! - Requirement check outcomes are never errors: the runner classifies every
//!   failure path into a [`CheckResult`](crate::requirements::CheckResult)
//!   and the terminal report is the sole failure channel

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for agentlab operations.
#[derive(Debug, Error)]
pub enum AgentlabError {
    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A version probe could not be executed.
    #[error("Probe failed for '{tool}': {message}")]
    ProbeFailed { tool: String, message: String },

    /// Shell command failed to spawn or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for agentlab operations.
pub type Result<T> = std::result::Result<T, AgentlabError>;
