// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    ok = { CaptureStatus::Exited(0), "ok" },
    nonzero = { CaptureStatus::Exited(2), "exit 2" },
    spawn = { CaptureStatus::SpawnFailed("no such file".into()), "spawn failed: no such file" },
    skipped = { CaptureStatus::Skipped { binary: "nfsstat".into() }, "skipped (nfsstat not found)" },
)]
fn headline(status: CaptureStatus, expected: &str) {
    assert_eq!(status.headline(), expected);
}

#[test]
fn timeout_headline_reports_limit() {
    let status = CaptureStatus::TimedOut(Duration::from_secs(30));
    assert_eq!(status.headline(), "timed out after 30.0s");
    assert!(!status.is_success());
}

#[test]
fn capture_headline_appends_duration_except_for_skips() {
    let mut capture = Capture {
        argv: vec!["x".into()],
        status: CaptureStatus::Exited(0),
        stdout: String::new(),
        stderr: String::new(),
        duration: Duration::from_millis(1234),
    };
    assert_eq!(capture.headline(), "ok (1.2s)");

    capture.status = CaptureStatus::Skipped {
        binary: "nfsstat".into(),
    };
    assert_eq!(capture.headline(), "skipped (nfsstat not found)");
}

#[test]
fn only_zero_exit_is_success() {
    assert!(CaptureStatus::Exited(0).is_success());
    assert!(!CaptureStatus::Exited(1).is_success());
    assert!(!CaptureStatus::SpawnFailed("x".into()).is_success());
}

#[test]
fn body_appends_stderr_under_marker() {
    let capture = Capture {
        argv: vec!["x".into()],
        status: CaptureStatus::Exited(1),
        stdout: "out\n".into(),
        stderr: "boom\n".into(),
        duration: Duration::ZERO,
    };
    assert_eq!(capture.body(), "out\n--- stderr ---\nboom\n");
}

#[test]
fn body_without_stderr_is_stdout_alone() {
    let capture = Capture {
        argv: vec!["x".into()],
        status: CaptureStatus::Exited(0),
        stdout: "out\n".into(),
        stderr: String::new(),
        duration: Duration::ZERO,
    };
    assert_eq!(capture.body(), "out\n");
}
