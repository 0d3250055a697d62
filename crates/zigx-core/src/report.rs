//! Result-with-warnings type for the packaging-time build hook.
//!
//! The hook never fails. Instead it returns a [`HookReport`]: how far it got
//! ([`HookOutcome`]) and every diagnostic it produced on the way, so callers
//! can inspect what degraded.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity of a hook diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Notice,
    Warning,
    Error,
}

/// Hook step a notice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStep {
    Skip,
    Compile,
    Toolchain,
    Build,
    Fallback,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// Set for notices only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<HookStep>,
    pub message: String,
}

/// Where the hook stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HookOutcome {
    /// The skip flag was set.
    Skipped,
    /// No build manifest at the project root.
    NoManifest { manifest: PathBuf },
    /// The toolchain is absent or its version query failed.
    ToolchainUnavailable,
    /// The build ran and failed.
    CompileFailed { code: Option<i32> },
    /// The build succeeded but the artifact is not where expected.
    ArtifactMissing { expected: PathBuf },
    /// The artifact was built.
    Built { artifact: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookReport {
    pub outcome: HookOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl HookReport {
    /// True when packaging proceeds without a freshly built artifact for a
    /// reason other than an explicit skip.
    pub const fn is_degraded(&self) -> bool {
        !matches!(
            self.outcome,
            HookOutcome::Built { .. } | HookOutcome::Skipped
        )
    }

    /// Built artifact, if any.
    pub const fn artifact(&self) -> Option<&PathBuf> {
        match &self.outcome {
            HookOutcome::Built { artifact } => Some(artifact),
            _ => None,
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level != DiagnosticLevel::Notice)
    }
}

/// Accumulates diagnostics while the hook runs.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    diagnostics: Vec<Diagnostic>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&mut self, step: HookStep, message: impl Into<String>) {
        self.push(DiagnosticLevel::Notice, Some(step), message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Warning, None, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Error, None, message.into());
    }

    fn push(&mut self, level: DiagnosticLevel, step: Option<HookStep>, message: String) {
        tracing::debug!(?level, ?step, %message, "hook diagnostic");
        self.diagnostics.push(Diagnostic {
            level,
            step,
            message,
        });
    }

    pub fn finish(self, outcome: HookOutcome) -> HookReport {
        HookReport {
            outcome,
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_and_built_are_not_degraded() {
        assert!(!ReportBuilder::new().finish(HookOutcome::Skipped).is_degraded());
        let built = ReportBuilder::new().finish(HookOutcome::Built {
            artifact: "/p/zig-out/bin/zigx".into(),
        });
        assert!(!built.is_degraded());
        assert!(built.artifact().is_some());

        let failed = ReportBuilder::new().finish(HookOutcome::CompileFailed { code: Some(1) });
        assert!(failed.is_degraded());
        assert!(failed.artifact().is_none());
    }

    #[test]
    fn warnings_exclude_notices() {
        let mut builder = ReportBuilder::new();
        builder.notice(HookStep::Toolchain, "Using Zig 0.13.0");
        builder.error("error: unable to compile");
        builder.warning("binary missing");
        let report = builder.finish(HookOutcome::ToolchainUnavailable);

        let levels: Vec<DiagnosticLevel> = report.warnings().map(|d| d.level).collect();
        assert_eq!(levels, vec![DiagnosticLevel::Error, DiagnosticLevel::Warning]);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let report = ReportBuilder::new().finish(HookOutcome::CompileFailed { code: Some(2) });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["status"], "compile_failed");
        assert_eq!(json["outcome"]["code"], 2);
    }

    #[test]
    fn only_notices_carry_a_step() {
        let mut builder = ReportBuilder::new();
        builder.notice(HookStep::Compile, "Compiling zigx binary...");
        builder.warning("Zig not found, using pre-built binary");
        let json = serde_json::to_value(builder.finish(HookOutcome::ToolchainUnavailable)).unwrap();

        assert_eq!(json["diagnostics"][0]["step"], "compile");
        assert!(json["diagnostics"][1].get("step").is_none());
    }
}
