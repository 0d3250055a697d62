//! Error types for binary resolution.

use std::path::PathBuf;
use thiserror::Error;

/// No candidate path exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("zigx binary not found (searched {} locations)", searched.len())]
    NotFound {
        /// Every candidate checked, in search order.
        searched: Vec<PathBuf>,
    },
}

/// Neither lookup nor the fallback build produced an artifact.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error(
        "zigx binary not found. Please ensure Zig is installed and run:\n  cd zigx && zig build\nOr install the pre-built wheel."
    )]
    Unresolved {
        /// Candidate paths checked before falling back to a build.
        searched: Vec<PathBuf>,
        /// Whether a source tree was found and the toolchain was invoked.
        build_attempted: bool,
    },
}

impl ResolutionError {
    pub fn unresolved(searched: Vec<PathBuf>, build_attempted: bool) -> Self {
        Self::Unresolved {
            searched,
            build_attempted,
        }
    }
}

impl From<LocateError> for ResolutionError {
    fn from(err: LocateError) -> Self {
        match err {
            LocateError::NotFound { searched } => Self::unresolved(searched, false),
        }
    }
}

/// Result type alias for resolution.
pub type ResolutionResult<T> = Result<T, ResolutionError>;
