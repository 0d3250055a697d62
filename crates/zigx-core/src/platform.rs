//! Host platform identification.
//!
//! The platform is derived once per run and only decides how the artifact
//! file is named and whether the build hook fixes up permissions.

/// Base name of the native artifact, without any platform suffix.
pub const ARTIFACT_BASE_NAME: &str = "zigx";

/// Operating system family the launcher runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// Any other Unix-like system (BSDs, illumos, ...).
    OtherUnix,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::OtherUnix,
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// File name an executable called `base` has on this platform.
    pub fn executable_name(self, base: &str) -> String {
        if self.is_windows() {
            format!("{base}.exe")
        } else {
            base.to_string()
        }
    }

    /// File name of the zigx artifact on this platform.
    pub fn artifact_name(self) -> String {
        self.executable_name(ARTIFACT_BASE_NAME)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::OtherUnix => "unix",
        };
        f.write_str(name)
    }
}
