//! Core domain for the zigx launcher.
//!
//! Pure types and decision logic: platform naming, build modes, settings,
//! search layout and policy, the binary locator and the build hook report.
//! Side effects go through the [`ports`] traits, implemented in
//! `zigx-runtime`.

#![deny(unused_crate_dependencies)]

pub mod build_mode;
pub mod error;
pub mod layout;
pub mod locator;
pub mod platform;
pub mod ports;
pub mod report;
pub mod settings;

// Re-export commonly used types for convenience
pub use build_mode::BuildMode;
pub use error::{LocateError, ResolutionError, ResolutionResult};
pub use layout::{
    BUILD_MANIFEST_FILE, Candidate, CandidateRule, LaunchLayout, SOURCE_ENTRY_FILE, SearchPolicy,
    build_output_path,
};
pub use locator::BinaryLocator;
pub use platform::{ARTIFACT_BASE_NAME, Platform};
pub use ports::{CommandSpec, Filesystem, ProcessOutput, ProcessRunner};
pub use report::{
    Diagnostic, DiagnosticLevel, HookOutcome, HookReport, HookStep, ReportBuilder,
};
pub use settings::{EnvSource, HookSettings, LauncherSettings, MapEnv, ProcessEnv};
