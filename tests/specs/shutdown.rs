// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal handling: a terminated run still closes out its log.

#![cfg(unix)]

use std::process::{Command as StdCommand, Stdio};
use std::time::Instant;

use crate::prelude::*;

#[test]
fn sigterm_stops_the_run_cleanly() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "tick"
argv = ["echo", "tick"]
"#,
    );

    let bin = assert_cmd::cargo::cargo_bin("perfmon");
    let mut child = StdCommand::new(bin)
        .args(["--interval", "1", "--duration", "60", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Let at least one cycle land before terminating.
    std::thread::sleep(Duration::from_millis(1500));
    let _ = StdCommand::new("kill").arg(child.id().to_string()).status();

    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            assert!(status.success(), "expected clean exit, got {status}");
            break;
        }
        if start.elapsed() > Duration::from_secs(10) {
            let _ = child.kill();
            panic!("process did not stop after SIGTERM");
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    let log = sandbox.read("run.log");
    assert!(log.contains("[tick] ok ("));
    assert!(log.contains("received shutdown signal, stopping"));
    assert!(log.contains("performance monitoring completed"));
}
