//! `zigx` launcher handler.
//!
//! Derives the search layout from the launcher's own location, then hands
//! off to the runtime dispatcher.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use zigx_core::{BinaryLocator, EnvSource, LaunchLayout, LauncherSettings};
use zigx_runtime::{
    HostFilesystem, RESOLUTION_FAILURE_EXIT_CODE, Resolver, SystemProcessRunner, Toolchain,
    dispatch,
};

use crate::error::CliError;

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Layout for a launcher executable at `launcher_exe`.
///
/// The package directory is the directory holding the (canonicalized)
/// launcher. The install prefix is the configured one, else the package
/// directory's parent, so `<prefix>/bin/zigx` searches `<prefix>/bin/`.
/// The launcher itself is excluded from the search. Paths are canonicalized
/// here so the locator can compare candidates verbatim.
pub fn launch_layout(
    settings: &LauncherSettings,
    launcher_exe: &Path,
) -> Result<LaunchLayout, CliError> {
    let launcher = canonical(launcher_exe);

    let package_dir = launcher
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| CliError::Layout(format!("{} has no parent directory", launcher.display())))?
        .to_path_buf();

    let prefix: Option<PathBuf> = settings
        .install_prefix
        .as_deref()
        .map(canonical)
        .or_else(|| package_dir.parent().map(Path::to_path_buf));

    let mut layout = LaunchLayout::new(package_dir).excluding(launcher);
    if let Some(prefix) = prefix {
        layout = layout.with_install_prefix(prefix);
    }
    Ok(layout)
}

/// Resolver for the launcher at `launcher_exe`, configured from `env`.
pub fn resolver(env: &dyn EnvSource, launcher_exe: &Path) -> Result<Resolver, CliError> {
    let settings = LauncherSettings::from_env(env);
    let layout = launch_layout(&settings, launcher_exe)?;
    let locator = BinaryLocator::for_host();
    tracing::debug!(
        package_dir = %layout.package_dir.display(),
        install_prefix = ?layout.install_prefix,
        platform = %locator.platform(),
        "launcher layout"
    );
    Ok(Resolver::new(
        locator,
        layout,
        Toolchain::new(settings.toolchain),
    ))
}

/// Run the launcher: resolve, forward `args`, return the exit code.
pub fn execute<I>(args: I, env: &dyn EnvSource) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let resolver = match std::env::current_exe()
        .map_err(CliError::from)
        .and_then(|exe| resolver(env, &exe))
    {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("{e}");
            return RESOLUTION_FAILURE_EXIT_CODE;
        }
    };

    dispatch::run(args, &resolver, &HostFilesystem, &SystemProcessRunner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zigx_core::MapEnv;
    use zigx_core::settings::{INSTALL_PREFIX_VAR, TOOLCHAIN_VAR};

    #[test]
    fn prefix_defaults_to_parent_of_package_dir() {
        let layout = launch_layout(
            &LauncherSettings::from_env(&MapEnv::new()),
            Path::new("/nonexistent/venv/bin/zigx"),
        )
        .unwrap();

        assert_eq!(layout.package_dir, PathBuf::from("/nonexistent/venv/bin"));
        assert_eq!(layout.install_prefix, Some(PathBuf::from("/nonexistent/venv")));
        assert_eq!(layout.exclude, Some(PathBuf::from("/nonexistent/venv/bin/zigx")));
    }

    #[test]
    fn configured_prefix_wins() {
        let env = MapEnv::new().with(INSTALL_PREFIX_VAR, "/opt/zigx");
        let layout = launch_layout(
            &LauncherSettings::from_env(&env),
            Path::new("/nonexistent/bin/zigx"),
        )
        .unwrap();
        assert_eq!(layout.install_prefix, Some(PathBuf::from("/opt/zigx")));
    }

    #[test]
    fn bare_file_name_has_no_layout() {
        let err = launch_layout(
            &LauncherSettings::from_env(&MapEnv::new()),
            Path::new("zigx-launcher-that-does-not-exist"),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Layout(_)));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_prefix_still_excludes_launcher() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        std::fs::create_dir_all(real.join("bin")).unwrap();
        std::fs::write(real.join("bin/zigx"), b"launcher").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let env = MapEnv::new().with(INSTALL_PREFIX_VAR, link.to_str().unwrap());
        let layout =
            launch_layout(&LauncherSettings::from_env(&env), &link.join("bin/zigx")).unwrap();

        let prefix = layout.install_prefix.clone().unwrap();
        assert_eq!(prefix, real.canonicalize().unwrap());
        assert!(layout.is_excluded(&prefix.join("bin/zigx")));
    }

    #[test]
    fn resolver_uses_configured_toolchain() {
        let env = MapEnv::new().with(TOOLCHAIN_VAR, "/opt/zig/zig");
        let resolver = resolver(&env, Path::new("/nonexistent/bin/zigx")).unwrap();
        assert_eq!(resolver.layout().package_dir, PathBuf::from("/nonexistent/bin"));
        assert_eq!(resolver.toolchain().program(), Path::new("/opt/zig/zig"));
    }
}
