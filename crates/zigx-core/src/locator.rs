//! Binary discovery.
//!
//! Walks the [`SearchPolicy`] table and returns the first candidate the
//! filesystem reports as existing. Existence is the only check: a candidate
//! that exists but cannot be executed fails later, at launch.

use std::path::PathBuf;

use crate::error::LocateError;
use crate::layout::{Candidate, LaunchLayout, SearchPolicy};
use crate::platform::Platform;
use crate::ports::Filesystem;

/// Finds the platform-named artifact among the policy's candidates.
#[derive(Debug, Clone)]
pub struct BinaryLocator {
    policy: SearchPolicy,
    platform: Platform,
}

impl BinaryLocator {
    pub const fn new(policy: SearchPolicy, platform: Platform) -> Self {
        Self { policy, platform }
    }

    /// Locator with the default search order for the host platform.
    pub fn for_host() -> Self {
        Self::new(SearchPolicy::default(), Platform::current())
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Ranked candidates for `layout`, including ones that do not exist.
    pub fn candidates(&self, layout: &LaunchLayout) -> Vec<Candidate> {
        self.policy
            .candidates(layout, &self.platform.artifact_name())
    }

    /// First existing candidate, re-checking each path on every call.
    pub fn locate(
        &self,
        layout: &LaunchLayout,
        fs: &dyn Filesystem,
    ) -> Result<PathBuf, LocateError> {
        let mut searched = Vec::new();

        for candidate in self.candidates(layout) {
            if layout.is_excluded(&candidate.path) {
                tracing::debug!(path = %candidate.path.display(), "skipping launcher itself");
                searched.push(candidate.path);
                continue;
            }

            if fs.exists(&candidate.path) {
                tracing::debug!(
                    path = %candidate.path.display(),
                    rank = candidate.rank,
                    rule = ?candidate.rule,
                    "found zigx binary"
                );
                return Ok(candidate.path);
            }

            tracing::trace!(path = %candidate.path.display(), "candidate missing");
            searched.push(candidate.path);
        }

        Err(LocateError::NotFound { searched })
    }
}
