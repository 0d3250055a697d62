//! Process runtime and OS-level concerns for the zigx launcher.
//!
//! Host adapters for the core ports ([`HostFilesystem`],
//! [`SystemProcessRunner`]), the Zig [`Toolchain`], and the three operations
//! built on them: [`Resolver::ensure_binary`], [`dispatch::run`] and
//! [`BuildHook::run`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod dispatch;
pub mod ensure;
mod fs;
pub mod hook;
mod process;
pub mod toolchain;

#[cfg(test)]
mod test_support;

pub use dispatch::RESOLUTION_FAILURE_EXIT_CODE;
pub use ensure::Resolver;
pub use fs::HostFilesystem;
pub use hook::BuildHook;
pub use process::SystemProcessRunner;
pub use toolchain::{Toolchain, ToolchainError, ToolchainResult};
