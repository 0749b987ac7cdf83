//! Domain Policies
//!
//! Pure decision rules, independent of any I/O.

pub mod version_gate;

pub use version_gate::{apply_no_watch_flag, needs_no_watch_flag, NO_WATCH_FLAG, NO_WATCH_MAX_VERSION};
