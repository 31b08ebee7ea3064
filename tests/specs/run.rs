// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end collection runs against custom command tables.

use crate::prelude::*;

#[test]
fn single_cycle_captures_command_output() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "echo_ok"
argv = ["echo", "ok"]
"#,
    );

    let assert = perfmon()
        .args(["--interval", "1", "--duration", "1", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let out = stdout_of(&assert);
    assert!(out.contains("logging to"));
    assert!(out.contains("completed 1 cycles (1 records)"));

    let log = sandbox.read("run.log");
    assert!(log.contains("starting linux performance monitoring"));
    assert!(log.contains("[echo_ok] ok ("));
    assert!(log.contains("\nok\n"));
    assert!(log.contains("performance monitoring completed"));
}

#[test]
fn three_second_run_performs_a_cycle_per_second() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "tick"
argv = ["echo", "tick"]
"#,
    );

    perfmon()
        .args(["--interval", "1", "--duration", "3", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let log = sandbox.read("run.log");
    let cycles = log.matches("collecting system stats").count();
    assert!(
        (2..=3).contains(&cycles),
        "expected 3 cycles (+-1), got {cycles}"
    );
    assert_eq!(log.matches("[tick] ok (").count(), cycles);
}

#[test]
fn missing_binary_is_recorded_and_later_entries_still_run() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "broken"
argv = ["no-such-binary-7f3a"]

[[cycle]]
label = "after"
argv = ["echo", "still-here"]
"#,
    );

    perfmon()
        .args(["--interval", "1", "--duration", "1", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let log = sandbox.read("run.log");
    assert!(log.contains("[broken] spawn failed:"));
    assert!(log.contains("still-here"));
}

#[test]
fn optional_entry_with_missing_binary_is_skipped() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "nfs_stats"
argv = ["no-such-binary-7f3a", "-s"]
optional = true

[[cycle]]
label = "after"
argv = ["echo", "still-here"]
"#,
    );

    perfmon()
        .args(["--interval", "1", "--duration", "1", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let log = sandbox.read("run.log");
    assert!(log.contains("[nfs_stats] skipped (no-such-binary-7f3a not found)"));
    assert!(log.contains("still-here"));
}

#[test]
fn fallback_argv_runs_when_primary_is_missing() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "disk_io"
argv = ["no-such-binary-7f3a", "-xm"]
fallback = ["echo", "fallback-ran"]
"#,
    );

    perfmon()
        .args(["--interval", "1", "--duration", "1", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let log = sandbox.read("run.log");
    assert!(log.contains("[disk_io] ok ("));
    assert!(log.contains("fallback-ran"));
}

#[test]
fn zero_duration_terminates_promptly_with_preamble_only() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[preamble]]
label = "sys_info"
argv = ["echo", "system details"]

[[cycle]]
label = "tick"
argv = ["echo", "tick"]
"#,
    );

    let assert = perfmon()
        .timeout(Duration::from_secs(10))
        .args(["--interval", "5", "--duration", "0", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    assert!(stdout_of(&assert).contains("completed 0 cycles (1 records)"));
    let log = sandbox.read("run.log");
    assert!(log.contains("[sys_info] ok ("));
    assert!(!log.contains("collecting system stats"));
}

#[test]
fn hung_command_is_bounded_by_its_timeout() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "hung"
argv = ["sleep", "30"]
timeout_secs = 1

[[cycle]]
label = "after"
argv = ["echo", "still-here"]
"#,
    );

    perfmon()
        .timeout(Duration::from_secs(20))
        .args(["--interval", "2", "--duration", "2", "--table"])
        .arg(&table)
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let log = sandbox.read("run.log");
    assert!(log.contains("[hung] timed out after 1.0s"));
    assert!(log.contains("still-here"));
}

#[test]
fn rerun_against_the_same_path_appends() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[preamble]]
label = "sys_info"
argv = ["echo", "system details"]
"#,
    );

    for _ in 0..2 {
        perfmon()
            .args(["--interval", "1", "--duration", "0", "--table"])
            .arg(&table)
            .arg("--log-file")
            .arg(sandbox.path("run.log"))
            .assert()
            .success();
    }

    let log = sandbox.read("run.log");
    assert_eq!(log.matches("starting linux performance monitoring").count(), 2);
    assert_eq!(log.matches("[sys_info] ok (").count(), 2);
}

#[test]
fn builtin_aix_table_is_selectable_by_flag() {
    let sandbox = Sandbox::new();

    // AIX tools don't exist here: uname succeeds, the rest become
    // spawn-failure records. The run itself still completes.
    perfmon()
        .args(["--platform", "aix", "--interval", "1", "--duration", "0"])
        .arg("--log-file")
        .arg(sandbox.path("run.log"))
        .assert()
        .success();

    let log = sandbox.read("run.log");
    assert!(log.contains("starting aix performance monitoring"));
    assert!(log.contains("[uname] ok ("));
    assert!(log.contains("[oslevel] spawn failed:"));
}
