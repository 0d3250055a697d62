//! Port definitions for the side effects the launcher and hook perform.
//!
//! Core owns the traits; `zigx-runtime` owns the host implementations. Every
//! operation takes its ports as parameters so tests can substitute fakes.

mod filesystem;
mod process;

pub use filesystem::Filesystem;
pub use process::{CommandSpec, ProcessOutput, ProcessRunner};
