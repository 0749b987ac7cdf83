//! System Command Runner
//!
//! Spawns real processes. Output streams straight into the job log so long
//! installs and builds show progress as they run.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandError, CommandRunner, CommandSpec};

/// Command runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    /// Send child stdout to stderr, keeping stdout free for NDJSON events
    stdout_to_stderr: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn build(&self, spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.exposed_args()).stdin(Stdio::null());
        if let Some(dir) = spec.cwd() {
            cmd.current_dir(dir);
        }
        if self.stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        } else {
            cmd.stdout(Stdio::inherit());
        }
        cmd.stderr(Stdio::inherit());
        cmd
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        tracing::debug!(command = %spec, cwd = ?spec.cwd(), "spawning");

        let status = self
            .build(spec)
            .status()
            .map_err(|source| CommandError::Spawn {
                command: spec.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: spec.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
