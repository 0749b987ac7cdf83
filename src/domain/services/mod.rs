//! Domain Services
//!
//! Stateless logic operating on file contents handed in by the caller.

pub mod lockfile;

pub use lockfile::{resolve_version, LockfileError, GENERATOR_PACKAGE};
