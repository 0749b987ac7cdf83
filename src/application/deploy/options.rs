//! Deploy Options
//!
//! Raw inputs for a deploy run and their validated form.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::AccessToken;
use crate::error::{DeployError, DeployResult};

/// Branch that receives the generated site when none is configured
pub const DEFAULT_DEPLOY_BRANCH: &str = "main";

/// Directory Scully writes the generated site to, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "dist/static";

/// Custom-domain file propagated into the generated site
pub const CNAME_FILE: &str = "CNAME";

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Personal access token used for the push
    pub access_token: AccessToken,
    /// Target branch; `None` or empty falls back to [`DEFAULT_DEPLOY_BRANCH`]
    pub deploy_branch: Option<String>,
    /// Extra arguments for `run build`
    pub build_args: String,
    /// Extra arguments for `run scully`
    pub scully_args: String,
    /// Checkout root; every command runs relative to it
    pub project_root: PathBuf,
    /// Generated site location, relative to `project_root`
    pub output_dir: PathBuf,
}

impl DeployOptions {
    pub fn new(access_token: impl AsRef<str>) -> Self {
        Self {
            access_token: AccessToken::new(access_token),
            deploy_branch: None,
            build_args: String::new(),
            scully_args: String::new(),
            project_root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_deploy_branch(mut self, branch: impl Into<String>) -> Self {
        self.deploy_branch = Some(branch.into());
        self
    }

    pub fn with_build_args(mut self, args: impl Into<String>) -> Self {
        self.build_args = args.into();
        self
    }

    pub fn with_scully_args(mut self, args: impl Into<String>) -> Self {
        self.scully_args = args.into();
        self
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub access_token: AccessToken,
    pub deploy_branch: String,
    pub build_args: String,
    pub scully_args: String,
    pub project_root: PathBuf,
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Validate inputs; a blank token is rejected before anything runs
    pub fn from_options(options: &DeployOptions) -> DeployResult<Self> {
        if options.access_token.is_blank() {
            return Err(DeployError::MissingAccessToken);
        }

        let deploy_branch = options
            .deploy_branch
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_DEPLOY_BRANCH)
            .to_string();

        Ok(Self {
            access_token: options.access_token.clone(),
            deploy_branch,
            build_args: options.build_args.clone(),
            scully_args: options.scully_args.clone(),
            project_root: options.project_root.clone(),
            output_dir: options.output_dir.clone(),
        })
    }

    pub fn project_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(relative)
    }

    /// Absolute-or-relative location of the generated site
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }
}
