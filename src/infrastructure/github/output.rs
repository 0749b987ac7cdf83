//! GitHub Actions step outputs
//!
//! Writes `name=value` lines to the file named by `$GITHUB_OUTPUT`. Outside
//! a workflow (no `GITHUB_OUTPUT`) the legacy `::set-output` command is
//! printed instead so local runs still show the result. In `--json` mode
//! that command goes to stderr.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination for step outputs
#[derive(Debug, Clone, Default)]
pub struct ActionsOutput {
    output_file: Option<PathBuf>,
    legacy_on_stderr: bool,
}

impl ActionsOutput {
    pub fn from_env() -> Self {
        Self {
            output_file: std::env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            legacy_on_stderr: false,
        }
    }

    pub fn with_output_file(path: impl Into<PathBuf>) -> Self {
        Self {
            output_file: Some(path.into()),
            legacy_on_stderr: false,
        }
    }

    /// Send the `::set-output` fallback to stderr instead of stdout
    pub fn with_legacy_on_stderr(mut self, enabled: bool) -> Self {
        self.legacy_on_stderr = enabled;
        self
    }

    /// Record a step output
    pub fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)
            }
            None if self.legacy_on_stderr => {
                writeln!(io::stderr(), "{}", legacy_command(name, value))
            }
            None => writeln!(io::stdout(), "{}", legacy_command(name, value)),
        }
    }
}

fn legacy_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", name, value)
}
