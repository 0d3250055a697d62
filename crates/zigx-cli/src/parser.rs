//! Argument parser for `zigx-build-hook`.
//!
//! The `zigx` launcher has no parser: every argument is forwarded.

use clap::Parser;
use std::path::PathBuf;

/// Compile the zigx binary before packaging.
///
/// Toolchain problems are reported as warnings and never fail the hook.
#[derive(Debug, Parser)]
#[command(name = "zigx-build-hook")]
#[command(version)]
pub struct HookCli {
    /// Project directory containing build.zig (defaults to the current directory)
    #[arg(long = "project-root", value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Print the hook report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        HookCli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = HookCli::parse_from(["zigx-build-hook"]);
        assert_eq!(cli.project_root, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_project_root_and_json() {
        let cli = HookCli::parse_from(["zigx-build-hook", "--project-root", "/src/zigx", "--json"]);
        assert_eq!(cli.project_root, Some(PathBuf::from("/src/zigx")));
        assert!(cli.json);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(HookCli::try_parse_from(["zigx-build-hook", "--release"]).is_err());
    }
}
