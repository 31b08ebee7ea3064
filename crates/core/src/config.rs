// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration: polling cadence, run deadline, log destination.

use std::path::PathBuf;
use std::time::Duration;

use crate::platform::Platform;

/// Default seconds between collection cycles.
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Default total run time in seconds.
pub const DEFAULT_DURATION_SECS: u64 = 60;

/// Configuration for one monitoring run.
///
/// Built once at startup and immutable for the lifetime of the run.
/// The collection loop is the sole owner.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Time between the start of consecutive collection cycles.
    pub interval: Duration,
    /// Total run time; the loop exits once this much time has elapsed.
    /// Zero means no collection cycles (preamble only).
    pub duration: Duration,
    /// Append-only log file receiving every captured record.
    pub log_path: PathBuf,
}

impl RunConfig {
    /// Validate and build a run configuration.
    ///
    /// A zero interval is rejected: the loop would spin executing the
    /// whole table back to back with no pause.
    pub fn new(
        interval: Duration,
        duration: Duration,
        log_path: PathBuf,
    ) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self {
            interval,
            duration,
            log_path,
        })
    }

    /// Default log path: `<temp dir>/<Platform>_Perf_Monitor_<pid>.log`.
    ///
    /// The PID suffix gives every run its own file, so concurrent or
    /// repeated runs never interleave records.
    pub fn default_log_path(platform: Platform) -> PathBuf {
        std::env::temp_dir().join(format!(
            "{}_Perf_Monitor_{}.log",
            platform.log_stem(),
            std::process::id()
        ))
    }
}

/// Configuration errors, reported before the run starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("polling interval must be greater than zero")]
    ZeroInterval,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
