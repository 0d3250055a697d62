//! Shared fakes for runtime unit tests.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mockall::mock;
use zigx_core::{CommandSpec, Filesystem, ProcessOutput, ProcessRunner};

mock! {
    pub Runner {}
    impl ProcessRunner for Runner {
        fn output(&self, command: &CommandSpec) -> io::Result<ProcessOutput>;
        fn status(&self, command: &CommandSpec) -> io::Result<i32>;
    }
}

pub fn exited(code: i32, stdout: &str, stderr: &str) -> ProcessOutput {
    ProcessOutput {
        code: Some(code),
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

/// Shared set of paths that "exist". Clone it into runner closures to
/// simulate a build creating its artifact.
pub type ExistingPaths = Arc<Mutex<HashSet<PathBuf>>>;

/// In-memory filesystem that records every write.
#[derive(Default)]
pub struct RecordingFs {
    pub existing: ExistingPaths,
    pub made_executable: Mutex<Vec<PathBuf>>,
}

impl RecordingFs {
    pub fn with(paths: &[&Path]) -> Self {
        let fs = Self::default();
        for path in paths {
            fs.add(path);
        }
        fs
    }

    pub fn add(&self, path: &Path) {
        self.existing.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.made_executable.lock().unwrap().clone()
    }
}

impl Filesystem for RecordingFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.lock().unwrap().contains(path)
    }

    fn make_executable(&self, path: &Path) -> io::Result<()> {
        self.made_executable.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
