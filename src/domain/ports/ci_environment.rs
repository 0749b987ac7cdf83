//! CI environment port
//!
//! Exposes the triggering ref, commit, actor and repository of the run.

use crate::domain::value_objects::RepoTarget;
use crate::error::DeployResult;

/// Context of the triggering CI run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiContext {
    /// Fully-qualified ref that triggered the run, e.g. `refs/heads/develop`
    pub git_ref: String,
    pub repo: RepoTarget,
}

impl CiContext {
    /// True when the run was triggered by a push to `deploy_branch` itself
    ///
    /// Exact string comparison against `refs/heads/<deploy_branch>`.
    pub fn is_deploy_branch(&self, deploy_branch: &str) -> bool {
        self.git_ref == format!("refs/heads/{}", deploy_branch)
    }
}

/// Source of the CI context
///
/// Implementations:
/// - `GitHubActionsEnv` - reads `GITHUB_*` variables
/// - fixed contexts in tests
pub trait CiEnvironment {
    fn context(&self) -> DeployResult<CiContext>;
}

impl<T: CiEnvironment + ?Sized> CiEnvironment for &T {
    fn context(&self) -> DeployResult<CiContext> {
        (**self).context()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(git_ref: &str) -> CiContext {
        CiContext {
            git_ref: git_ref.to_string(),
            repo: RepoTarget {
                owner: "octo".to_string(),
                name: "site".to_string(),
                sha: "abc".to_string(),
                actor: "monalisa".to_string(),
                host: "github.com".to_string(),
            },
        }
    }

    #[test]
    fn deploy_branch_match_is_exact() {
        assert!(context("refs/heads/main").is_deploy_branch("main"));
        assert!(!context("refs/heads/main-v2").is_deploy_branch("main"));
        assert!(!context("refs/tags/main").is_deploy_branch("main"));
        assert!(!context("main").is_deploy_branch("main"));
        assert!(!context("refs/heads/Main").is_deploy_branch("main"));
    }
}
