//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Config;

/// Config file looked up in the project root when `--config` is not given
pub const CONFIG_FILE: &str = "scully-deploy.toml";

/// Errors raised while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested file does not exist
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `deploy.brnach`
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (unknown keys)
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config file, or `scully-deploy.toml` from the project root
///
/// A missing default file yields the built-in defaults; a missing explicit
/// file is an error.
pub fn load(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    match explicit {
        Some(path) if !path.exists() => Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }),
        Some(path) => load_with_warnings(path),
        None => {
            let default_path = project_root.join(CONFIG_FILE);
            if default_path.exists() {
                load_with_warnings(&default_path)
            } else {
                Ok((Config::default(), Vec::new()))
            }
        }
    }
}
