//! Deploy Module
//!
//! Orchestrates a deploy run: install, build, generate, commit, push.
//!
//! ## Structure
//!
//! - `options` - Inputs (`DeployOptions`) and their validated form (`RunConfig`)
//! - `result` - Outcome types (`DeployReport`, `DeployStatus`)
//! - `use_case` - The orchestrator (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use scully_deploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(runner, fs, ci);
//! let report = use_case.execute(&DeployOptions::new(token))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{
    DeployOptions, RunConfig, CNAME_FILE, DEFAULT_DEPLOY_BRANCH, DEFAULT_OUTPUT_DIR,
};
pub use result::{DeployReport, DeployStatus};
pub use use_case::{DeployUseCase, COMMIT_MESSAGE_PREFIX};
