//! Binary resolution with a best-effort source build.
//!
//! Resolution order:
//! - **Lookup**: the first existing candidate from the locator's policy.
//! - **Source build**: if a source tree with `main.zig` is present, build it
//!   once with `-Doptimize=ReleaseSafe` and use the fresh artifact.
//! - **Failure**: a single [`ResolutionError`] with remediation text.

use std::path::{Path, PathBuf};

use zigx_core::layout::SOURCE_ENTRY_FILE;
use zigx_core::{
    BinaryLocator, BuildMode, Filesystem, LaunchLayout, LocateError, ProcessRunner,
    ResolutionError, ResolutionResult, build_output_path,
};

use crate::toolchain::{Toolchain, ToolchainError};

/// Locates the zigx artifact, building it from source as a last resort.
#[derive(Debug, Clone)]
pub struct Resolver {
    locator: BinaryLocator,
    layout: LaunchLayout,
    toolchain: Toolchain,
}

impl Resolver {
    pub const fn new(locator: BinaryLocator, layout: LaunchLayout, toolchain: Toolchain) -> Self {
        Self {
            locator,
            layout,
            toolchain,
        }
    }

    pub const fn layout(&self) -> &LaunchLayout {
        &self.layout
    }

    pub const fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Resolve the artifact path.
    ///
    /// Spawns at most one process (the fallback build) and only when no
    /// candidate exists and a source tree was found.
    pub fn ensure_binary(
        &self,
        fs: &dyn Filesystem,
        runner: &dyn ProcessRunner,
    ) -> ResolutionResult<PathBuf> {
        let searched = match self.locator.locate(&self.layout, fs) {
            Ok(path) => return Ok(path),
            Err(LocateError::NotFound { searched }) => searched,
        };

        let Some(project_dir) = self.find_source_project(fs) else {
            tracing::debug!("no zigx source tree found");
            return Err(ResolutionError::unresolved(searched, false));
        };

        if let Some(artifact) = self.build_from_source(&project_dir, fs, runner) {
            return Ok(artifact);
        }

        Err(ResolutionError::unresolved(searched, true))
    }

    /// Project directory of the first source dir holding the entry file.
    fn find_source_project(&self, fs: &dyn Filesystem) -> Option<PathBuf> {
        self.layout
            .source_dirs()
            .into_iter()
            .find(|dir| fs.exists(&dir.join(SOURCE_ENTRY_FILE)))
            .and_then(|dir| dir.parent().map(Path::to_path_buf))
    }

    fn build_from_source(
        &self,
        project_dir: &Path,
        fs: &dyn Filesystem,
        runner: &dyn ProcessRunner,
    ) -> Option<PathBuf> {
        eprintln!("Building zigx from source...");

        match self
            .toolchain
            .build(runner, project_dir, &BuildMode::ReleaseSafe)
        {
            Ok(_) => {
                let artifact = build_output_path(project_dir, self.locator.platform());
                if fs.exists(&artifact) {
                    return Some(artifact);
                }
                tracing::warn!(
                    expected = %artifact.display(),
                    "build succeeded but produced no binary"
                );
            }
            Err(ToolchainError::BuildFailed { stderr, .. }) => {
                eprintln!("Build failed: {stderr}");
            }
            Err(ToolchainError::Missing { program }) => {
                tracing::debug!(program = %program.display(), "toolchain not installed");
            }
            Err(e) => {
                eprintln!("Build failed: {e}");
            }
        }

        None
    }
}
