//! End-to-end checks of the two binaries.

use std::process::Command;

const LAUNCHER: &str = env!("CARGO_BIN_EXE_zigx");
const HOOK: &str = env!("CARGO_BIN_EXE_zigx-build-hook");

#[test]
fn hook_skip_prints_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(HOOK)
        .arg("--project-root")
        .arg(dir.path())
        .arg("--json")
        .env("ZIGX_SKIP_BUILD", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"]["status"], "skipped");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping Zig compilation (ZIGX_SKIP_BUILD=1)"));
}

#[test]
fn hook_without_manifest_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(HOOK)
        .arg("--project-root")
        .arg(dir.path())
        .env_remove("ZIGX_SKIP_BUILD")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("build.zig not found"));
}

#[test]
fn hook_rejects_missing_project_root() {
    let output = Command::new(HOOK)
        .args(["--project-root", "/nonexistent/zigx/project"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn launcher_reports_unresolved_binary() {
    let prefix = tempfile::tempdir().unwrap();
    let output = Command::new(LAUNCHER)
        .arg("--help")
        .env("ZIGX_INSTALL_PREFIX", prefix.path())
        .env("ZIGX_ZIG", "/nonexistent/zig")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("zigx binary not found"));
}

#[cfg(unix)]
#[test]
fn launcher_forwards_args_and_exit_code() {
    use std::os::unix::fs::PermissionsExt;

    let prefix = tempfile::tempdir().unwrap();
    let bin = prefix.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    let script = bin.join("zigx");
    std::fs::write(&script, "#!/bin/sh\necho \"$@\"\nexit 7\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = Command::new(LAUNCHER)
        .args(["fmt", "--check", "a b"])
        .env("ZIGX_INSTALL_PREFIX", prefix.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "fmt --check a b\n");
}
