//! Environment-driven configuration.
//!
//! Settings are pure functions of an [`EnvSource`]. The binaries build them
//! once from [`ProcessEnv`]; tests use [`MapEnv`] so nothing mutates the real
//! process environment.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::build_mode::BuildMode;

/// Skip the packaging-time build when set to exactly `"1"`.
pub const SKIP_BUILD_VAR: &str = "ZIGX_SKIP_BUILD";
/// Optimization mode for the packaging-time build.
pub const BUILD_MODE_VAR: &str = "ZIGX_BUILD_MODE";
/// Toolchain program to invoke instead of `zig`.
pub const TOOLCHAIN_VAR: &str = "ZIGX_ZIG";
/// Overrides the installation prefix searched by the launcher.
pub const INSTALL_PREFIX_VAR: &str = "ZIGX_INSTALL_PREFIX";

/// Toolchain program used when [`TOOLCHAIN_VAR`] is unset.
pub const DEFAULT_TOOLCHAIN: &str = "zig";

/// Read access to environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

fn toolchain_from(env: &dyn EnvSource) -> PathBuf {
    env.var(TOOLCHAIN_VAR)
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_TOOLCHAIN), PathBuf::from)
}

/// Configuration of the `zigx` launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Toolchain used for the fallback build.
    pub toolchain: PathBuf,
    /// Explicit installation prefix, if configured.
    pub install_prefix: Option<PathBuf>,
}

impl LauncherSettings {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            toolchain: toolchain_from(env),
            install_prefix: env
                .var(INSTALL_PREFIX_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Configuration of the packaging-time build hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSettings {
    pub skip: bool,
    pub mode: BuildMode,
    pub toolchain: PathBuf,
}

impl HookSettings {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            skip: env.var(SKIP_BUILD_VAR).as_deref() == Some("1"),
            mode: env
                .var(BUILD_MODE_VAR)
                .map(BuildMode::from)
                .unwrap_or_default(),
            toolchain: toolchain_from(env),
        }
    }
}
