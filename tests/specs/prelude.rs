// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for end-to-end specs.

#![allow(dead_code)]

use std::path::PathBuf;

pub use std::time::Duration;

pub use assert_cmd::Command;

/// A fresh `perfmon` invocation with a generous safety timeout.
pub fn perfmon() -> Command {
    let mut cmd = Command::cargo_bin("perfmon").unwrap();
    cmd.timeout(Duration::from_secs(60));
    cmd
}

/// Temp directory holding a run's table and log files.
pub struct Sandbox {
    temp: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    /// Write a TOML command table and return its path.
    pub fn table(&self, toml: &str) -> PathBuf {
        let path = self.path("table.toml");
        std::fs::write(&path, toml).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap()
    }
}

/// Stdout of a finished assert as a string.
pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

/// Stderr of a finished assert as a string.
pub fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}
