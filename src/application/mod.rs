//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (policies, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - install, build, generate, commit and push a Scully site

pub mod deploy;

pub use deploy::{DeployOptions, DeployReport, DeployStatus, DeployUseCase, RunConfig};
