//! Error handling integration tests for the bcp CLI.
//!
//! These tests verify proper error handling behaviors:
//! - Failures name the step that failed on stderr and exit non-zero
//! - A failed open never damages the other side of the copy
//! - Argument validation happens before any file I/O

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[path = "../common/mod.rs"]
mod common;
use common::TestFixture;

#[test]
fn test_missing_source_fails() {
    let fixture = TestFixture::new();
    let dst = fixture.dest_path("out.txt");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("/nonexistent/path/file.txt")
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to open source file"));

    // No destination file is created
    assert!(!dst.exists());
}

#[test]
fn test_missing_source_preserves_existing_destination() {
    let fixture = TestFixture::new();
    let dst = fixture.dest_path("out.txt");
    fs::write(&dst, "pre-existing").unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("/nonexistent/path/file.txt")
        .arg(&dst)
        .assert()
        .failure()
        .code(1);

    assert_eq!(fs::read_to_string(&dst).unwrap(), "pre-existing");
}

#[test]
fn test_source_is_directory_fails() {
    let fixture = TestFixture::new();
    let dst = fixture.dest_path("out.txt");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg(fixture.src.path())
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is a directory"));

    assert!(!dst.exists());
}

#[test]
fn test_missing_destination_directory_fails() {
    let fixture = TestFixture::new();
    let src = fixture.write_source("in.txt", b"content");
    let dst = fixture.dest_path("no/such/dir/out.txt");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to open destination file"));

    // Source is unmodified
    assert_eq!(fs::read_to_string(&src).unwrap(), "content");
}

#[cfg(unix)]
#[test]
fn test_permission_denied_destination_fails() {
    use std::os::unix::fs::PermissionsExt;

    // Root bypasses permission checks, so this test is meaningless as root
    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let fixture = TestFixture::new();
    let src = fixture.write_source("in.txt", b"content");

    let readonly_dir = fixture.dst.path().join("readonly");
    fs::create_dir(&readonly_dir).unwrap();
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o555)).unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg(&src)
        .arg(readonly_dir.join("out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to open destination file"));

    // Restore permissions so TempDir cleanup succeeds
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_error_reports_write_phase() {
    let fixture = TestFixture::new();
    let src = fixture.write_source("in.bin", &vec![1u8; 4096]);

    // /dev/full accepts the open but fails every write with ENOSPC
    if !std::path::Path::new("/dev/full").exists() {
        return;
    }

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg(&src)
        .arg("/dev/full")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_one_argument_prints_usage() {
    let fixture = TestFixture::new();
    let src = fixture.write_source("in.txt", b"content");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg(&src)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_arguments_rejected_before_io() {
    let fixture = TestFixture::new();
    let src = fixture.write_source("in.txt", b"content");
    let dst = fixture.dest_path("out.txt");
    let extra = fixture.dest_path("extra.txt");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg(&src)
        .arg(&dst)
        .arg(&extra)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    // Argument validation happens before any file I/O
    assert!(!dst.exists());
    assert!(!extra.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_remove_partial_deletes_destination_on_failure() {
    let fixture = TestFixture::new();
    let dst = fixture.dest_path("out.bin");

    // /proc/self/mem opens fine but the first read fails with EIO (the
    // null page is unmapped), so the failure hits after the destination
    // has been created
    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("--remove-partial")
        .arg("/proc/self/mem")
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));

    assert!(!dst.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_copy_leaves_partial_destination_by_default() {
    let fixture = TestFixture::new();
    let dst = fixture.dest_path("out.bin");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("/proc/self/mem")
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));

    // Without --remove-partial, whatever was written stays in place
    assert!(dst.exists());
}

#[test]
fn test_remove_partial_flag_accepted_on_success() {
    let fixture = TestFixture::new();
    let src = fixture.write_source("in.txt", b"content");
    let dst = fixture.dest_path("out.txt");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("--remove-partial")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&dst).unwrap(), "content");
}
