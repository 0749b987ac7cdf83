//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod ci_environment;
pub mod command_runner;
pub mod deploy_events;
pub mod file_system;

pub use ci_environment::{CiContext, CiEnvironment};
pub use command_runner::{CommandArg, CommandError, CommandRunner, CommandSpec, REDACTED};
pub use deploy_events::{DeployEvent, DeployEventSink, DeployStep, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
