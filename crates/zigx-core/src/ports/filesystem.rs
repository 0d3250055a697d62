//! Filesystem port.

use std::io;
use std::path::Path;

/// The filesystem queries and writes the launcher and hook need.
pub trait Filesystem {
    /// Whether `path` exists right now. Never cached by callers.
    fn exists(&self, path: &Path) -> bool;

    /// Mark `path` executable for owner, group and others (`0o755`).
    ///
    /// Implementations on platforms without mode bits may do nothing.
    fn make_executable(&self, path: &Path) -> io::Result<()>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn make_executable(&self, path: &Path) -> io::Result<()> {
        (**self).make_executable(path)
    }
}
