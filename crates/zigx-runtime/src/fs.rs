//! Host filesystem adapter.

use std::io;
use std::path::Path;

use zigx_core::Filesystem;

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl Filesystem for HostFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[cfg(unix)]
    fn make_executable(&self, path: &Path) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
    }

    #[cfg(not(unix))]
    fn make_executable(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn exists_tracks_the_disk() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("zigx");
        assert!(!HostFilesystem.exists(&file));
        std::fs::write(&file, b"stub").unwrap();
        assert!(HostFilesystem.exists(&file));
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_sets_0755() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join("zigx");
        std::fs::write(&file, b"stub").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o600)).unwrap();

        HostFilesystem.make_executable(&file).unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn make_executable_on_missing_file_fails_on_unix() {
        let dir = tempdir().unwrap();
        let result = HostFilesystem.make_executable(&dir.path().join("missing"));
        #[cfg(unix)]
        assert!(result.is_err());
        #[cfg(not(unix))]
        assert!(result.is_ok());
    }
}
