//! GitHub Actions CI context
//!
//! Reads the default `GITHUB_*` environment variables of a workflow run.

use crate::domain::ports::{CiContext, CiEnvironment};
use crate::domain::value_objects::{
    host_from_server_url, parse_repository, RepoTarget, DEFAULT_HOST,
};
use crate::error::{DeployError, DeployResult};

/// CI environment backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubActionsEnv;

impl CiEnvironment for GitHubActionsEnv {
    fn context(&self) -> DeployResult<CiContext> {
        context_from(|key| std::env::var(key).ok())
    }
}

/// Build the context from an environment lookup
pub fn context_from(get_env: impl Fn(&str) -> Option<String>) -> DeployResult<CiContext> {
    let require = |var: &'static str| {
        get_env(var)
            .filter(|v| !v.trim().is_empty())
            .ok_or(DeployError::MissingContext { var })
    };

    let git_ref = require("GITHUB_REF")?;
    let repository = require("GITHUB_REPOSITORY")?;
    let (owner, name) =
        parse_repository(&repository).ok_or_else(|| DeployError::InvalidContext {
            var: "GITHUB_REPOSITORY",
            value: repository.clone(),
            reason: "expected owner/name",
        })?;
    let sha = require("GITHUB_SHA")?;
    let actor = require("GITHUB_ACTOR")?;
    let host = get_env("GITHUB_SERVER_URL")
        .and_then(|url| host_from_server_url(&url))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    Ok(CiContext {
        git_ref,
        repo: RepoTarget {
            owner,
            name,
            sha,
            actor,
            host,
        },
    })
}
