//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                git_ref,
                deploy_branch,
            } => serde_json::json!({
                "event": "start",
                "ref": git_ref,
                "deploy_branch": deploy_branch,
            }),

            DeployEvent::Skipped { git_ref } => serde_json::json!({
                "event": "skipped",
                "ref": git_ref,
                "reason": "deploy_branch",
            }),

            DeployEvent::PackageManagerDetected { manager } => serde_json::json!({
                "event": "package_manager",
                "name": manager.program(),
            }),

            DeployEvent::StepStarted { step } => serde_json::json!({
                "event": "step_start",
                "step": step.as_str(),
            }),

            DeployEvent::CommandStarted { step, command } => serde_json::json!({
                "event": "command",
                "step": step.as_str(),
                "command": command,
            }),

            DeployEvent::StepFinished { step } => serde_json::json!({
                "event": "step_complete",
                "step": step.as_str(),
            }),

            DeployEvent::GeneratorVersionResolved { version, no_watch } => serde_json::json!({
                "event": "generator_version",
                "version": version,
                "no_watch": no_watch,
            }),

            DeployEvent::CnameCopied { destination } => serde_json::json!({
                "event": "cname_copied",
                "destination": destination.display().to_string(),
            }),

            DeployEvent::Completed {
                repository,
                deploy_branch,
            } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "repository": repository,
                "deploy_branch": deploy_branch,
            }),
        };

        self.write_event(json);
    }
}
