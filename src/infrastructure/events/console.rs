//! Console Event Sink
//!
//! Turns deploy events into `tracing` log lines for the job log.

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEventSink;

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                git_ref,
                deploy_branch,
            } => {
                tracing::info!(%git_ref, %deploy_branch, "Ready to build your Scully site");
            }
            DeployEvent::Skipped { git_ref } => {
                tracing::info!(%git_ref, "Triggered by the deploy branch itself, nothing to deploy");
            }
            DeployEvent::PackageManagerDetected { manager } => {
                tracing::info!(%manager, "Installing dependencies with {}", manager);
            }
            DeployEvent::StepStarted { step } => {
                tracing::debug!(%step, "step started");
            }
            DeployEvent::CommandStarted { step, command } => {
                tracing::info!(%step, "Running: {}", command);
            }
            DeployEvent::StepFinished { step } => {
                tracing::info!(%step, "Finished {}", step);
            }
            DeployEvent::GeneratorVersionResolved { version, no_watch } => {
                if no_watch {
                    tracing::info!(%version, "Scully {} needs --nw, adding it", version);
                } else {
                    tracing::info!(%version, "Using Scully {}", version);
                }
            }
            DeployEvent::CnameCopied { destination } => {
                tracing::info!(destination = %destination.display(), "Copied CNAME");
            }
            DeployEvent::Completed {
                repository,
                deploy_branch,
            } => {
                tracing::info!(%repository, %deploy_branch, "Deployed your site to {}:{}", repository, deploy_branch);
            }
        }
    }
}
