//! Terminal and workflow-log presentation

pub mod ci;
pub mod error;
