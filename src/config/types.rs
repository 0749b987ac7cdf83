//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::application::deploy::DeployOptions;
use crate::domain::value_objects::AccessToken;

/// `scully-deploy.toml`
///
/// The access token is deliberately not a field: it must come from a
/// workflow secret, never from a committed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub build: ArgsConfig,

    #[serde(default)]
    pub scully: ArgsConfig,
}

/// `[deploy]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    /// Branch that receives the generated site
    #[serde(default)]
    pub branch: Option<String>,

    /// Generated site directory, relative to the project root
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// `[build]` and `[scully]` sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArgsConfig {
    #[serde(default)]
    pub args: Option<String>,
}

/// Values supplied by CLI flags or `INPUT_*` variables
///
/// GitHub Actions sets unset optional inputs to the empty string, so empty
/// values count as absent.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub access_token: AccessToken,
    pub deploy_branch: Option<String>,
    pub build_args: Option<String>,
    pub scully_args: Option<String>,
    pub output_dir: Option<PathBuf>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Merge with inputs (inputs win) into deploy options for `project_root`
    pub fn into_options(self, inputs: InputOverrides, project_root: impl Into<PathBuf>) -> DeployOptions {
        let mut options = DeployOptions::new(inputs.access_token.expose())
            .with_project_root(project_root);

        if let Some(branch) = present(inputs.deploy_branch).or(present(self.deploy.branch)) {
            options = options.with_deploy_branch(branch);
        }
        if let Some(args) = present(inputs.build_args).or(present(self.build.args)) {
            options = options.with_build_args(args);
        }
        if let Some(args) = present(inputs.scully_args).or(present(self.scully.args)) {
            options = options.with_scully_args(args);
        }
        if let Some(dir) = inputs
            .output_dir
            .or(self.deploy.output_dir)
            .filter(|d| !d.as_os_str().is_empty())
        {
            options = options.with_output_dir(dir);
        }
        options
    }
}
