//! Process runner backed by `std::process::Command`.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use zigx_core::{CommandSpec, ProcessOutput, ProcessRunner};

/// Runs commands on the host, blocking until they exit. No timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn output(&self, spec: &CommandSpec) -> io::Result<ProcessOutput> {
        tracing::debug!(command = %spec, cwd = ?spec.cwd, "running (captured)");

        let output = Self::command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn status(&self, spec: &CommandSpec) -> io::Result<i32> {
        tracing::debug!(command = %spec, "running (inherited stdio)");

        let status = Self::command(spec).status()?;
        Ok(exit_code(status))
    }
}

/// Exit code of `status`, using `128 + signal` for signal-terminated
/// children on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("/bin/sh").arg("-c").arg(script)
    }

    #[test]
    fn output_captures_both_streams() {
        let out = SystemProcessRunner
            .output(&sh("echo out; echo err >&2; exit 3"))
            .unwrap();
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
    }

    #[test]
    fn status_returns_exact_code() {
        for code in [0, 1, 2, 127] {
            let got = SystemProcessRunner
                .status(&sh(&format!("exit {code}")))
                .unwrap();
            assert_eq!(got, code);
        }
    }

    #[test]
    fn signal_maps_to_128_plus_signal() {
        let got = SystemProcessRunner.status(&sh("kill -TERM $$")).unwrap();
        assert_eq!(got, 128 + 15);
    }

    #[test]
    fn cwd_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let out = SystemProcessRunner
            .output(&sh("pwd").current_dir(dir.path()))
            .unwrap();
        let reported = std::path::PathBuf::from(out.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = SystemProcessRunner
            .output(&CommandSpec::new("/nonexistent/zig").arg("version"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
