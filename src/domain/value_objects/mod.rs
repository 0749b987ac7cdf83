//! Value Objects
//!
//! Small immutable types with no identity of their own.

pub mod access_token;
pub mod args;
pub mod package_manager;
pub mod repo_target;

pub use access_token::AccessToken;
pub use args::{normalize_build_args, normalize_scully_args, split_args, PASSTHROUGH};
pub use package_manager::{PackageManager, NPM_LOCKFILE, YARN_LOCKFILE};
pub use repo_target::{host_from_server_url, parse_repository, RepoTarget, DEFAULT_HOST};
