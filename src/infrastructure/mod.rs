//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Command runner spawning real processes
//! - `fs/` - Local file system
//! - `events/` - Deploy event sinks (console logging, NDJSON)
//! - `github/` - GitHub Actions context and step outputs

pub mod events;
pub mod fs;
pub mod github;
pub mod process;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use github::{ActionsOutput, GitHubActionsEnv};
pub use process::SystemCommandRunner;
