//! The external Zig toolchain, treated as an opaque subprocess.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use zigx_core::{BuildMode, CommandSpec, ProcessOutput, ProcessRunner};

/// Errors from invoking the toolchain.
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// The toolchain program does not exist.
    #[error("{} not found", program.display())]
    Missing { program: PathBuf },

    /// The toolchain exists but could not be started.
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `zig version` exited unsuccessfully.
    #[error("version query failed (exit code: {code:?}): {stderr}")]
    VersionFailed { code: Option<i32>, stderr: String },

    /// `zig build` exited unsuccessfully.
    #[error("build failed (exit code: {code:?}): {stderr}")]
    BuildFailed { code: Option<i32>, stderr: String },
}

/// Result type alias for toolchain operations
pub type ToolchainResult<T> = Result<T, ToolchainError>;

/// A Zig toolchain program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    program: PathBuf,
}

impl Toolchain {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `zig version` command.
    pub fn version_command(&self) -> CommandSpec {
        CommandSpec::new(&self.program).arg("version")
    }

    /// `zig build -Doptimize=<mode>` run in `project_dir`.
    pub fn build_command(&self, project_dir: &Path, mode: &BuildMode) -> CommandSpec {
        CommandSpec::new(&self.program)
            .arg("build")
            .arg(mode.optimize_flag())
            .current_dir(project_dir)
    }

    /// Query the toolchain version string.
    pub fn version(&self, runner: &dyn ProcessRunner) -> ToolchainResult<String> {
        let out = self.invoke(runner, &self.version_command())?;
        if !out.success() {
            return Err(ToolchainError::VersionFailed {
                code: out.code,
                stderr: out.stderr.trim().to_string(),
            });
        }
        Ok(out.stdout.trim().to_string())
    }

    /// Build the project in `project_dir`, returning the captured output on
    /// success.
    pub fn build(
        &self,
        runner: &dyn ProcessRunner,
        project_dir: &Path,
        mode: &BuildMode,
    ) -> ToolchainResult<ProcessOutput> {
        let out = self.invoke(runner, &self.build_command(project_dir, mode))?;
        if !out.success() {
            return Err(ToolchainError::BuildFailed {
                code: out.code,
                stderr: out.stderr,
            });
        }
        Ok(out)
    }

    fn invoke(
        &self,
        runner: &dyn ProcessRunner,
        command: &CommandSpec,
    ) -> ToolchainResult<ProcessOutput> {
        runner.output(command).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ToolchainError::Missing {
                    program: self.program.clone(),
                }
            } else {
                ToolchainError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            }
        })
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new(zigx_core::settings::DEFAULT_TOOLCHAIN)
    }
}
