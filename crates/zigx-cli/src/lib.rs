//! Binaries for zigx: the `zigx` launcher and the `zigx-build-hook`
//! packaging hook.
//!
//! This crate is the composition root. It is the only place that reads the
//! current executable, the working directory and the real environment; the
//! handlers pass them on as explicit inputs.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binaries
use anyhow as _;
use dotenvy as _;

pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use error::CliError;
pub use parser::HookCli;
