//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::{AgentlabError, Result};

/// Config file name looked up at the project root.
pub const CONFIG_FILE: &str = ".agentlab.yml";

/// Load project configuration.
///
/// A missing file is not an error — the checker is useful with no config at
/// all — so defaults are returned. A file that exists but fails to parse is
/// a hard error: a half-read config silently checking the wrong things is
/// worse than stopping.
pub fn load_config(project_root: &Path) -> Result<Config> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!("no config at {}; using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    serde_yaml::from_str(&content).map_err(|e| AgentlabError::ConfigParseError {
        path,
        message: e.to_string(),
    })
}
