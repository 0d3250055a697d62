//! Filesystem layout of packaged and development installs.
//!
//! Two layouts are supported:
//! - an installed package: `<package_dir>/bin/zigx`, or the artifact in the
//!   installation prefix's `bin/`
//! - a development tree: `<package_dir>/zig-out/bin/zigx` or the sibling
//!   `zigx/` project directory one level up
//!
//! The order in which candidates are tried is a [`SearchPolicy`] table rather
//! than fixed code, so deployments can extend or reorder it.

use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Directory of the packaged binary, relative to the package directory.
pub const PACKAGED_BIN_DIR: &str = "bin";
/// Toolchain output directory, relative to a project directory.
pub const BUILD_OUTPUT_DIR: [&str; 2] = ["zig-out", "bin"];
/// Name of the project directory in a development tree.
pub const DEV_TREE_DIR: &str = "zigx";
/// Source directory, relative to a project directory.
pub const SOURCE_DIR: &str = "src";
/// Entry file whose presence marks a buildable source tree.
pub const SOURCE_ENTRY_FILE: &str = "main.zig";
/// Build manifest at the project root.
pub const BUILD_MANIFEST_FILE: &str = "build.zig";

/// Where the toolchain leaves the artifact when building `project_dir`.
pub fn build_output_path(project_dir: &Path, platform: Platform) -> PathBuf {
    build_output_dir(project_dir).join(platform.artifact_name())
}

fn build_output_dir(project_dir: &Path) -> PathBuf {
    BUILD_OUTPUT_DIR
        .iter()
        .fold(project_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// The explicit filesystem inputs of binary resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    /// Directory colocated with the launcher.
    pub package_dir: PathBuf,
    /// Installation prefix whose `bin/` is searched last.
    pub install_prefix: Option<PathBuf>,
    /// A path that must never be returned, normally the launcher itself.
    /// Compared verbatim, so callers pass it in the same form as
    /// `package_dir`.
    pub exclude: Option<PathBuf>,
}

impl LaunchLayout {
    pub fn new(package_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_dir: package_dir.into(),
            install_prefix: None,
            exclude: None,
        }
    }

    #[must_use]
    pub fn with_install_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.install_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    /// The sibling development-tree project directory, if the package
    /// directory has a parent.
    pub fn dev_tree_dir(&self) -> Option<PathBuf> {
        self.package_dir.parent().map(|p| p.join(DEV_TREE_DIR))
    }

    /// Source directories that may hold [`SOURCE_ENTRY_FILE`], in the order
    /// they are checked.
    pub fn source_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.package_dir.join(SOURCE_DIR)];
        if let Some(dev) = self.dev_tree_dir() {
            dirs.push(dev.join(SOURCE_DIR));
        }
        dirs
    }

    /// Whether `path` is the excluded launcher path.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.as_deref() == Some(path)
    }
}

/// One entry of the search policy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRule {
    /// `<package_dir>/bin/`
    PackagedBin,
    /// `<package_dir>/zig-out/bin/`
    LocalBuildOutput,
    /// `<package_dir>/../zigx/zig-out/bin/`
    ParentBuildOutput,
    /// `<install_prefix>/bin/`
    PrefixBin,
    /// A fixed directory, for deployment-specific layouts.
    Directory(PathBuf),
}

impl CandidateRule {
    /// Directory this rule points at, or `None` when the layout lacks the
    /// input it needs.
    pub fn directory(&self, layout: &LaunchLayout) -> Option<PathBuf> {
        match self {
            Self::PackagedBin => Some(layout.package_dir.join(PACKAGED_BIN_DIR)),
            Self::LocalBuildOutput => Some(build_output_dir(&layout.package_dir)),
            Self::ParentBuildOutput => layout.dev_tree_dir().map(|d| build_output_dir(&d)),
            Self::PrefixBin => layout
                .install_prefix
                .as_ref()
                .map(|p| p.join(PACKAGED_BIN_DIR)),
            Self::Directory(dir) => Some(dir.clone()),
        }
    }
}

/// A candidate artifact path and its rank in the search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Zero-based position in the policy table.
    pub rank: usize,
    pub rule: CandidateRule,
}

/// Ordered candidate rules. First existing candidate wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    rules: Vec<CandidateRule>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                CandidateRule::PackagedBin,
                CandidateRule::LocalBuildOutput,
                CandidateRule::ParentBuildOutput,
                CandidateRule::PrefixBin,
            ],
        }
    }
}

impl SearchPolicy {
    pub const fn new(rules: Vec<CandidateRule>) -> Self {
        Self { rules }
    }

    /// Append a rule after the existing ones.
    #[must_use]
    pub fn then(mut self, rule: CandidateRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Expand the table into concrete candidate paths for `artifact_name`.
    ///
    /// Rules that do not apply to the layout are skipped; ranks still follow
    /// table positions.
    pub fn candidates(&self, layout: &LaunchLayout, artifact_name: &str) -> Vec<Candidate> {
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(rank, rule)| {
                rule.directory(layout).map(|dir| Candidate {
                    path: dir.join(artifact_name),
                    rank,
                    rule: rule.clone(),
                })
            })
            .collect()
    }
}
