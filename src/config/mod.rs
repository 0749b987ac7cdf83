//! Configuration module for scully-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags / `INPUT_*` environment variables (highest priority)
//! 2. Project config (`scully-deploy.toml` or `--config`)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load, load_with_warnings, ConfigError, ConfigWarning, CONFIG_FILE};
pub use types::{ArgsConfig, Config, DeployConfig, InputOverrides};
