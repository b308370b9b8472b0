//! agentlab - Prerequisite checking and environment setup for
//! agent-development labs.
//!
//! agentlab replaces the ad-hoc per-platform setup scripts that lab
//! participants run before a course: it probes the machine for the required
//! tools, compares versions, renders a pass/warning/error report, and can
//! bootstrap the lab environment itself.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading and schema
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Operating system detection and release checks
//! - [`report`] - Report rendering and install hints
//! - [`requirements`] - Requirement registry, probing, and classification
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output, spinners, and prompts
//!
//! # Example
//!
//! ```
//! use agentlab::requirements::{
//!     Requirement, RequirementRunner, RunSummary, ScriptedProbe,
//! };
//!
//! let probe = ScriptedProbe::new().with_tool("git", "git version 2.39.1");
//! let runner = RequirementRunner::new(&probe);
//! let requirement = Requirement::new("git", "Git", "git").with_min("2.30");
//!
//! let mut summary = RunSummary::new();
//! summary.record(runner.check(&requirement));
//! assert!(summary.is_success());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{AgentlabError, Result};
