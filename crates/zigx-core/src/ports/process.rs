//! Process runner port.
//!
//! Two ways to run a command: capture its output (toolchain calls) or let it
//! inherit the launcher's stdio (forwarding to the artifact).

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// A command to spawn: program, arguments and optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Working directory; `None` keeps the caller's.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit code and captured streams of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Spawns external processes and blocks until they exit.
///
/// `Err` means the process could not be started at all; a process that ran
/// and failed is an `Ok` carrying its exit code.
pub trait ProcessRunner {
    /// Run with piped stdout/stderr and collect them.
    fn output(&self, command: &CommandSpec) -> io::Result<ProcessOutput>;

    /// Run with inherited stdio and return the exit code.
    ///
    /// A child killed by a signal reports `128 + signal`.
    fn status(&self, command: &CommandSpec) -> io::Result<i32>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn output(&self, command: &CommandSpec) -> io::Result<ProcessOutput> {
        (**self).output(command)
    }

    fn status(&self, command: &CommandSpec) -> io::Result<i32> {
        (**self).status(command)
    }
}
