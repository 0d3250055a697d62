//! `zigx-build-hook` handler.

use std::path::PathBuf;

use zigx_core::{EnvSource, HookReport, HookSettings, Platform};
use zigx_runtime::{BuildHook, HostFilesystem, SystemProcessRunner};

use crate::error::CliError;
use crate::parser::HookCli;

/// Project root from the arguments, else the current directory.
fn project_root(cli: &HookCli) -> Result<PathBuf, CliError> {
    let root = match &cli.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(CliError::Arguments(format!(
            "project root {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Run the build hook.
///
/// Only argument problems are errors; every toolchain problem is part of
/// the returned report.
pub fn execute(cli: &HookCli, env: &dyn EnvSource) -> Result<HookReport, CliError> {
    let root = project_root(cli)?;
    let settings = HookSettings::from_env(env);
    tracing::debug!(root = %root.display(), ?settings, "running build hook");

    let hook = BuildHook::new(settings, root, Platform::current());
    Ok(hook.run(&HostFilesystem, &SystemProcessRunner))
}
