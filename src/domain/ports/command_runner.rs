//! CommandRunner port - abstraction over external process execution
//!
//! The orchestrator describes every tool invocation as a [`CommandSpec`] and
//! hands it to a runner. Production code spawns real processes; tests use a
//! recording fake.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Placeholder printed wherever a secret would appear
pub const REDACTED: &str = "***";

/// Errors raised while running an external command
///
/// `command` is always the redacted rendering of the invocation.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started at all
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited unsuccessfully
    #[error("`{command}` failed with {}", exit_label(.code))]
    Failed { command: String, code: Option<i32> },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// A single command-line argument
#[derive(Clone, PartialEq, Eq)]
pub enum CommandArg {
    /// Ordinary argument, safe to log
    Plain(String),
    /// Argument carrying a credential; rendered as `redacted` everywhere
    Secret { value: String, redacted: String },
}

impl CommandArg {
    pub fn secret(value: impl Into<String>, redacted: impl Into<String>) -> Self {
        CommandArg::Secret {
            value: value.into(),
            redacted: redacted.into(),
        }
    }

    /// The real value, for handing to the operating system only
    pub fn expose(&self) -> &str {
        match self {
            CommandArg::Plain(value) => value,
            CommandArg::Secret { value, .. } => value,
        }
    }

    /// The value as it may appear in logs and error messages
    pub fn display_value(&self) -> &str {
        match self {
            CommandArg::Plain(value) => value,
            CommandArg::Secret { redacted, .. } => redacted,
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, CommandArg::Secret { .. })
    }
}

impl fmt::Debug for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandArg::Plain(value) => f.debug_tuple("Plain").field(value).finish(),
            CommandArg::Secret { redacted, .. } => f.debug_tuple("Secret").field(redacted).finish(),
        }
    }
}

impl From<&str> for CommandArg {
    fn from(value: &str) -> Self {
        CommandArg::Plain(value.to_string())
    }
}

impl From<String> for CommandArg {
    fn from(value: String) -> Self {
        CommandArg::Plain(value)
    }
}

/// Description of one external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<CommandArg>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<CommandArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<CommandArg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg_list(&self) -> &[CommandArg] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Arguments with secrets exposed (only for process spawning)
    pub fn exposed_args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(CommandArg::expose)
    }

    /// Arguments as they may be logged
    pub fn display_args(&self) -> Vec<&str> {
        self.args.iter().map(CommandArg::display_value).collect()
    }
}

/// Renders the redacted command line, e.g. `git push --force https://***@github.com/o/r.git`
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.display_value())?;
        }
        Ok(())
    }
}

/// Abstract command execution
///
/// Implementations:
/// - `SystemCommandRunner` - spawns processes with inherited stdio
/// - recording fakes in tests
pub trait CommandRunner {
    /// Run the command to completion; non-zero exit is an error
    fn run(&self, command: &CommandSpec) -> Result<(), CommandError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &CommandSpec) -> Result<(), CommandError> {
        (**self).run(command)
    }
}
