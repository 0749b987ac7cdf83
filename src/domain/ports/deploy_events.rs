//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables progress logging, JSON event streams, and debugging.

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::PackageManager;

/// Steps of a deploy run that invoke external tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Install,
    Build,
    Generate,
    Commit,
    Push,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::Install => "install",
            DeployStep::Build => "build",
            DeployStep::Generate => "generate",
            DeployStep::Commit => "commit",
            DeployStep::Push => "push",
        }
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during a deploy run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Inputs validated, run started
    Started {
        git_ref: String,
        deploy_branch: String,
    },

    /// Triggered by the deploy branch itself; nothing to do
    Skipped { git_ref: String },

    /// Package manager chosen from which lock file exists
    PackageManagerDetected { manager: PackageManager },

    /// Step started
    StepStarted { step: DeployStep },

    /// External command about to run (redacted command line)
    CommandStarted { step: DeployStep, command: String },

    /// Step finished successfully
    StepFinished { step: DeployStep },

    /// Generator version resolved from the lock file
    GeneratorVersionResolved { version: String, no_watch: bool },

    /// CNAME copied into the output directory
    CnameCopied { destination: PathBuf },

    /// Site pushed
    Completed {
        repository: String,
        deploy_branch: String,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: tracing log lines
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-command events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
