//! Command handlers for the two binaries.

pub mod hook;
pub mod launch;
