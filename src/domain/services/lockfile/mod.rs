//! Generator version lookup in package-manager lock files
//!
//! - `yarn` - classic (`yarn.lock` v1) and Berry lock files
//! - `npm` - `package-lock.json`, lockfile versions 1 through 3

mod npm;
mod yarn;

pub use npm::find_version as find_npm_version;
pub use yarn::{descriptor_name, find_version as find_yarn_version};

use semver::Version;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::PackageManager;

/// npm package name of the static-site generator
pub const GENERATOR_PACKAGE: &str = "@scullyio/scully";

/// Errors raised while resolving a package version from a lock file
#[derive(Error, Debug)]
pub enum LockfileError {
    /// Lock file could not be read
    #[error("failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: FsError,
    },

    /// Lock file is not valid for its format
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    /// No entry for the package
    #[error("package '{package}' not found in {file} - is it listed in package.json?")]
    PackageNotFound { package: String, file: String },

    /// Entry found but its version is not semantic
    #[error("package '{package}' has version '{version}' in {file}, which is not a valid semantic version")]
    InvalidVersion {
        package: String,
        version: String,
        file: String,
        #[source]
        source: semver::Error,
    },
}

/// Resolve the exact version of `package` from lock file `content`
pub fn resolve_version(
    manager: PackageManager,
    content: &str,
    package: &str,
) -> Result<Version, LockfileError> {
    let file = manager.lockfile_name();
    let found = match manager {
        PackageManager::Yarn => find_yarn_version(content, package),
        PackageManager::Npm => find_npm_version(content, package),
    }
    .map_err(|message| LockfileError::Parse {
        file: file.to_string(),
        message,
    })?;

    let raw = found.ok_or_else(|| LockfileError::PackageNotFound {
        package: package.to_string(),
        file: file.to_string(),
    })?;

    Version::parse(&raw).map_err(|source| LockfileError::InvalidVersion {
        package: package.to_string(),
        version: raw,
        file: file.to_string(),
        source,
    })
}
