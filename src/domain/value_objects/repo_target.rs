//! Repository the generated site is pushed to

use std::fmt;

use crate::domain::ports::{CommandArg, REDACTED};

use super::AccessToken;

/// Default host when the CI platform does not report one
pub const DEFAULT_HOST: &str = "github.com";

/// Target repository plus the triggering commit and actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub owner: String,
    pub name: String,
    /// Full identifier of the triggering commit
    pub sha: String,
    /// Login of the user that triggered the run
    pub actor: String,
    /// Host name, e.g. `github.com`
    pub host: String,
}

impl RepoTarget {
    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Committer email synthesized from the actor, `<actor>@users.noreply.<host>`
    pub fn committer_email(&self) -> String {
        format!("{}@users.noreply.{}", self.actor, self.host)
    }

    /// Authenticated push URL as a secret command argument
    ///
    /// The token only ever lives inside the returned argument; its display
    /// form replaces it with `***`.
    pub fn push_url(&self, token: &AccessToken) -> CommandArg {
        CommandArg::secret(
            format!(
                "https://{}@{}/{}.git",
                token.expose(),
                self.host,
                self.slug()
            ),
            format!("https://{}@{}/{}.git", REDACTED, self.host, self.slug()),
        )
    }
}

impl fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host, self.slug())
    }
}

/// Split `owner/name` as reported by `GITHUB_REPOSITORY`
pub fn parse_repository(value: &str) -> Option<(String, String)> {
    let (owner, name) = value.trim().split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((owner.to_string(), name.to_string()))
}

/// Host name from a server URL such as `https://github.com`
pub fn host_from_server_url(url: &str) -> Option<String> {
    let rest = url
        .trim()
        .strip_prefix("https://")
        .or_else(|| url.trim().strip_prefix("http://"))
        .unwrap_or(url.trim());
    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
