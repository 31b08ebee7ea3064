// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI surface specs: help, version, and up-front rejection of bad
//! configuration (exit code 2).

use crate::prelude::*;

#[test]
fn help_shows_usage_and_flags() {
    let assert = perfmon().arg("--help").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("Usage:"));
    assert!(out.contains("--interval"));
    assert!(out.contains("--duration"));
    assert!(out.contains("--platform"));
    assert!(out.contains("--table"));
}

#[test]
fn version_shows_version() {
    let assert = perfmon().arg("--version").assert().success();
    assert!(stdout_of(&assert).contains("0.1"));
}

#[test]
fn zero_interval_is_rejected() {
    let assert = perfmon()
        .args(["--interval", "0", "--duration", "0"])
        .assert()
        .code(2);
    assert!(stderr_of(&assert).contains("interval"));
}

#[test]
fn missing_table_file_is_rejected() {
    let sandbox = Sandbox::new();
    let assert = perfmon()
        .args(["--table"])
        .arg(sandbox.path("nope.toml"))
        .assert()
        .code(2);
    assert!(stderr_of(&assert).contains("cannot read table file"));
}

#[test]
fn duplicate_labels_in_table_file_are_rejected() {
    let sandbox = Sandbox::new();
    let table = sandbox.table(
        r#"
platform = "linux"

[[cycle]]
label = "ps"
argv = ["ps"]

[[cycle]]
label = "ps"
argv = ["ps", "aux"]
"#,
    );
    let assert = perfmon().arg("--table").arg(table).assert().code(2);
    assert!(stderr_of(&assert).contains("duplicate command label"));
}

#[test]
fn unknown_platform_is_rejected() {
    perfmon()
        .args(["--platform", "solaris"])
        .assert()
        .failure();
}
