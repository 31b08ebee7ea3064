// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn one external command and capture its output.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::record::{Capture, CaptureStatus};

/// Run `argv` to completion, bounded by `limit`.
///
/// Never returns an error: every way a command can go wrong is itself a
/// capture (the failure text is the record). On timeout the child is
/// killed via `kill_on_drop` and the partial run is recorded without
/// output.
pub async fn run(argv: &[String], limit: Duration) -> Capture {
    let start = Instant::now();

    let Some((program, args)) = argv.split_first() else {
        return Capture {
            argv: argv.to_vec(),
            status: CaptureStatus::SpawnFailed("empty argv".to_string()),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        };
    };

    let cmd_span = tracing::info_span!(
        "monitor.cmd",
        cmd = %program,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(program);
    process
        .args(args)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true);

    let child = match process.spawn() {
        Ok(child) => child,
        Err(source) => {
            return Capture {
                argv: argv.to_vec(),
                status: CaptureStatus::SpawnFailed(source.to_string()),
                stdout: String::new(),
                stderr: String::new(),
                duration: start.elapsed(),
            };
        }
    };

    match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) => {
            let duration = start.elapsed();
            let exit_code = output.status.code().unwrap_or(-1);
            cmd_span.record("exit_code", exit_code);
            cmd_span.record("duration_ms", duration.as_millis() as u64);
            Capture {
                argv: argv.to_vec(),
                status: CaptureStatus::Exited(exit_code),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                duration,
            }
        }
        Ok(Err(source)) => Capture {
            argv: argv.to_vec(),
            status: CaptureStatus::SpawnFailed(source.to_string()),
            stdout: String::new(),
            stderr: String::new(),
            duration: start.elapsed(),
        },
        // Dropping the wait future drops the child, which kills it.
        Err(_) => {
            tracing::warn!(cmd = %program, limit_secs = limit.as_secs(), "command timed out");
            Capture {
                argv: argv.to_vec(),
                status: CaptureStatus::TimedOut(limit),
                stdout: String::new(),
                stderr: String::new(),
                duration: start.elapsed(),
            }
        }
    }
}

/// Whether `name` resolves to an executable, either as an explicit path
/// or through `PATH`.
pub fn binary_on_path(name: &str) -> bool {
    let path = Path::new(name);
    if path.components().count() > 1 {
        return is_executable(path);
    }
    match std::env::var_os("PATH") {
        Some(paths) => std::env::split_paths(&paths).any(|dir| is_executable(&dir.join(name))),
        None => false,
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
