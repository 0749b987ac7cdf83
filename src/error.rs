//! Error types for scully-deploy
//!
//! Uses `thiserror` for library errors. Every step of the deploy propagates
//! its failure unchanged; only the binary converts it into a failure report.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CommandError, FsError};
use crate::domain::services::LockfileError;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
///
/// Messages never contain the access token: commands are rendered with
/// their secret arguments redacted before they reach an error.
#[derive(Error, Debug)]
pub enum DeployError {
    /// No access token supplied (or only whitespace)
    #[error(
        "no access token found - provide one by setting the `access-token` input for this action"
    )]
    MissingAccessToken,

    /// Required CI context variable is not set
    #[error("missing CI context: environment variable {var} is not set")]
    MissingContext { var: &'static str },

    /// CI context variable is set but malformed
    #[error("invalid CI context: {var}='{value}' ({reason})")]
    InvalidContext {
        var: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Argument string could not be split into words
    #[error("could not split {input} '{value}' into arguments - check for unbalanced quotes")]
    InvalidArguments { input: &'static str, value: String },

    /// External tool failed to start or exited non-zero
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Generator version could not be resolved from the lock file
    #[error(transparent)]
    Lockfile(#[from] LockfileError),

    /// CNAME existed but could not be copied into the output directory
    #[error("failed to copy CNAME to {}: {source}", .to.display())]
    CopyCname {
        to: PathBuf,
        #[source]
        source: FsError,
    },
}

impl DeployError {
    /// Whether the error was raised before any side effect took place
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DeployError::MissingAccessToken
                | DeployError::MissingContext { .. }
                | DeployError::InvalidContext { .. }
                | DeployError::InvalidArguments { .. }
        )
    }
}
