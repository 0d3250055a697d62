//! Packaging-time build hook.
//!
//! Compiles the zigx artifact before packaging collects it. Toolchain
//! problems never abort packaging: every step that cannot proceed records a
//! diagnostic and returns a [`HookReport`], leaving whatever pre-built binary
//! is already in place.

use std::path::PathBuf;

use zigx_core::settings::SKIP_BUILD_VAR;
use zigx_core::{
    BUILD_MANIFEST_FILE, Filesystem, HookOutcome, HookReport, HookSettings, HookStep, Platform,
    ProcessRunner, ReportBuilder, build_output_path,
};

use crate::toolchain::{Toolchain, ToolchainError};

/// The build hook for one project directory.
#[derive(Debug, Clone)]
pub struct BuildHook {
    settings: HookSettings,
    project_root: PathBuf,
    platform: Platform,
}

impl BuildHook {
    pub fn new(settings: HookSettings, project_root: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            settings,
            project_root: project_root.into(),
            platform,
        }
    }

    /// Where a successful build leaves the artifact.
    pub fn artifact_path(&self) -> PathBuf {
        build_output_path(&self.project_root, self.platform)
    }

    /// Run the hook. Always returns a report, never an error.
    pub fn run(&self, fs: &dyn Filesystem, runner: &dyn ProcessRunner) -> HookReport {
        let mut report = ReportBuilder::new();

        if self.settings.skip {
            report.notice(
                HookStep::Skip,
                format!("Skipping Zig compilation ({SKIP_BUILD_VAR}=1)"),
            );
            return report.finish(HookOutcome::Skipped);
        }

        let manifest = self.project_root.join(BUILD_MANIFEST_FILE);
        if !fs.exists(&manifest) {
            report.warning(format!(
                "{} not found, skipping Zig compilation",
                manifest.display()
            ));
            return report.finish(HookOutcome::NoManifest { manifest });
        }

        report.notice(HookStep::Compile, "Compiling zigx binary...");

        let toolchain = Toolchain::new(&self.settings.toolchain);
        match toolchain.version(runner) {
            Ok(version) => report.notice(HookStep::Toolchain, format!("Using Zig {version}")),
            Err(e) => {
                tracing::debug!(error = %e, "toolchain probe failed");
                report.warning("Zig not found, using pre-built binary");
                return report.finish(HookOutcome::ToolchainUnavailable);
            }
        }

        let mode = &self.settings.mode;
        report.notice(
            HookStep::Build,
            format!("Building with {}...", mode.optimize_flag()),
        );

        if let Err(e) = toolchain.build(runner, &self.project_root, mode) {
            let code = match &e {
                ToolchainError::BuildFailed { code, stderr } => {
                    report.error(format!("Error compiling zigx: {}", stderr.trim()));
                    *code
                }
                other => {
                    report.error(format!("Error compiling zigx: {other}"));
                    None
                }
            };
            report.notice(
                HookStep::Fallback,
                "Falling back to pre-built binary if available",
            );
            return report.finish(HookOutcome::CompileFailed { code });
        }

        let artifact = self.artifact_path();
        if !fs.exists(&artifact) {
            report.warning(format!("Binary not found at {}", artifact.display()));
            return report.finish(HookOutcome::ArtifactMissing { expected: artifact });
        }

        if !self.platform.is_windows() {
            if let Err(e) = fs.make_executable(&artifact) {
                report.warning(format!(
                    "Could not mark {} executable: {e}",
                    artifact.display()
                ));
            }
        }

        report.notice(
            HookStep::Success,
            format!("Successfully compiled zigx binary at {}", artifact.display()),
        );
        report.finish(HookOutcome::Built { artifact })
    }
}
