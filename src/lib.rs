//! scully-deploy - publish a Scully site from CI
//!
//! Installs a project's dependencies, builds it, runs the Scully static-site
//! generator and force-pushes the generated output to a deploy branch of the
//! same repository.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployStatus, DeployUseCase};
pub use config::{Config, ConfigError, InputOverrides};
pub use error::{DeployError, DeployResult};
