//! GitHub Actions integration

mod environment;
mod output;

pub use environment::{context_from, GitHubActionsEnv};
pub use output::ActionsOutput;
