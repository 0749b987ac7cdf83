//! Domain Layer
//!
//! Deploy decisions and the ports the orchestrator talks through.
//! Nothing here spawns processes or touches the disk.

pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
