//! Deploy Result
//!
//! Report of a finished deploy run.

use semver::Version;

use crate::domain::value_objects::PackageManager;

/// How the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStatus {
    /// Site generated and pushed
    Deployed,
    /// Triggered by the deploy branch itself; nothing was run
    SkippedDeployBranch,
}

/// Report of a successful deploy run
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub status: DeployStatus,
    pub deploy_branch: String,
    pub package_manager: Option<PackageManager>,
    pub generator_version: Option<Version>,
    /// Whether `--nw` was passed to the generator
    pub no_watch: bool,
    pub cname_copied: bool,
}

impl DeployReport {
    pub fn skipped(deploy_branch: impl Into<String>) -> Self {
        Self {
            status: DeployStatus::SkippedDeployBranch,
            deploy_branch: deploy_branch.into(),
            package_manager: None,
            generator_version: None,
            no_watch: false,
            cname_copied: false,
        }
    }

    /// True when the site was pushed (drives the `success` output)
    pub fn is_deployed(&self) -> bool {
        self.status == DeployStatus::Deployed
    }
}
