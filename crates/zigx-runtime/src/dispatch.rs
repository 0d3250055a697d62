//! Argument forwarding to the resolved artifact.

use std::ffi::OsString;

use zigx_core::{CommandSpec, Filesystem, ProcessRunner};

use crate::ensure::Resolver;

/// Exit code used when the launcher itself cannot run the artifact.
pub const RESOLUTION_FAILURE_EXIT_CODE: i32 = 1;

/// Resolve the artifact and run it with `args`, returning its exit code.
///
/// Arguments are passed through unexamined. The child inherits stdio and the
/// working directory. On resolution failure nothing is spawned and the exit
/// code is [`RESOLUTION_FAILURE_EXIT_CODE`].
pub fn run<I>(
    args: I,
    resolver: &Resolver,
    fs: &dyn Filesystem,
    runner: &dyn ProcessRunner,
) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let binary = match resolver.ensure_binary(fs, runner) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            return RESOLUTION_FAILURE_EXIT_CODE;
        }
    };

    let command = CommandSpec::new(&binary).args(args);
    match runner.status(&command) {
        Ok(code) => {
            tracing::debug!(code, binary = %binary.display(), "zigx exited");
            code
        }
        Err(e) => {
            eprintln!("failed to launch {}: {e}", binary.display());
            RESOLUTION_FAILURE_EXIT_CODE
        }
    }
}
