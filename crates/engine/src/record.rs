// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capture types: what one executed table entry produced.

use std::time::Duration;

/// How a command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureStatus {
    /// Process ran to completion with this exit code.
    Exited(i32),
    /// Process was killed after exceeding its timeout.
    TimedOut(Duration),
    /// Process could not be spawned (binary missing, permission denied).
    SpawnFailed(String),
    /// Optional entry whose binary is absent from `PATH`.
    Skipped { binary: String },
}

impl CaptureStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CaptureStatus::Exited(0))
    }

    /// Status text for the record header line.
    pub fn headline(&self) -> String {
        match self {
            CaptureStatus::Exited(0) => "ok".to_string(),
            CaptureStatus::Exited(code) => format!("exit {code}"),
            CaptureStatus::TimedOut(limit) => {
                format!("timed out after {:.1}s", limit.as_secs_f64())
            }
            CaptureStatus::SpawnFailed(err) => format!("spawn failed: {err}"),
            CaptureStatus::Skipped { binary } => format!("skipped ({binary} not found)"),
        }
    }
}

/// Captured result of one command execution.
///
/// Output is kept in full; the log is the storage, there is no
/// truncation policy.
#[derive(Debug, Clone)]
pub struct Capture {
    pub argv: Vec<String>,
    pub status: CaptureStatus,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl Capture {
    /// A record for an entry that never spawned.
    pub fn skipped(argv: Vec<String>, binary: &str) -> Self {
        Self {
            argv,
            status: CaptureStatus::Skipped {
                binary: binary.to_string(),
            },
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        }
    }

    /// Record header text: the status plus the wall duration. Skips
    /// never ran, so they carry no duration.
    pub fn headline(&self) -> String {
        match &self.status {
            CaptureStatus::Skipped { .. } => self.status.headline(),
            status => format!("{} ({:.1}s)", status.headline(), self.duration.as_secs_f64()),
        }
    }

    /// Combined body text for the log section: stdout, then stderr under
    /// a marker line when present.
    pub fn body(&self) -> String {
        let mut body = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !body.is_empty() && !body.ends_with('\n') {
                body.push('\n');
            }
            body.push_str("--- stderr ---\n");
            body.push_str(&self.stderr);
        }
        body
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
