//! CLI-specific error types and exit-code mapping.

use thiserror::Error;

/// Failures of the binaries themselves, as opposed to the toolchain or the
/// forwarded artifact.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (current executable unknown, unreadable directory, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// The launcher's own location does not yield a usable layout.
    #[error("Cannot derive launcher layout: {0}")]
    Layout(String),

    /// Writing the hook report failed.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 2: Invalid arguments (clap's usage code)
    /// - 74: IO error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Io(_) | Self::Output(_) => 74, // EX_IOERR
            Self::Layout(_) => 1,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Layout("x".into()).exit_code(), 1);
        let io: CliError = std::io::Error::other("boom").into();
        assert_eq!(io.exit_code(), 74);
        assert_eq!(io.to_string(), "IO error: boom");
    }
}
