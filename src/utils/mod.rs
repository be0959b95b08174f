//! Utility modules shared by both batch commands.

pub mod fs;
pub mod plural;
