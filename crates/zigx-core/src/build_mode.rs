//! Zig optimization mode selection.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Optimization mode passed to `zig build -Doptimize=<mode>`.
///
/// Unknown values are kept verbatim in [`BuildMode::Custom`]; rejecting an
/// invalid mode is the toolchain's job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BuildMode {
    Debug,
    /// Optimized with safety checks kept. The default.
    #[default]
    ReleaseSafe,
    ReleaseFast,
    ReleaseSmall,
    Custom(String),
}

impl BuildMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Debug => "Debug",
            Self::ReleaseSafe => "ReleaseSafe",
            Self::ReleaseFast => "ReleaseFast",
            Self::ReleaseSmall => "ReleaseSmall",
            Self::Custom(raw) => raw,
        }
    }

    /// The `-Doptimize=` flag for this mode.
    pub fn optimize_flag(&self) -> String {
        format!("-Doptimize={}", self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Debug" => Self::Debug,
            "ReleaseSafe" => Self::ReleaseSafe,
            "ReleaseFast" => Self::ReleaseFast,
            "ReleaseSmall" => Self::ReleaseSmall,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl From<String> for BuildMode {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<BuildMode> for String {
    fn from(mode: BuildMode) -> Self {
        mode.as_str().to_string()
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
