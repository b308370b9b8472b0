//! Project configuration: loading and schema.

pub mod loader;
pub mod schema;

pub use loader::{load_config, CONFIG_FILE};
pub use schema::{Config, DebugConfig, RequirementConfig, SetupConfig, SetupStep};
