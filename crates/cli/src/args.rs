// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use perfmon_core::{Platform, DEFAULT_DURATION_SECS, DEFAULT_INTERVAL_SECS};

/// Periodically run OS diagnostic commands and append their output to a
/// per-platform log file.
#[derive(Debug, Parser)]
#[command(name = "perfmon", version)]
pub struct Args {
    /// Seconds between collection cycles
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// Total seconds to run; 0 collects the preamble only
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: u64,

    /// Command table to use (defaults to the build target's platform)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Log file path (defaults to <tmp>/<Platform>_Perf_Monitor_<pid>.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Custom TOML command table; its platform field wins over --platform
    #[arg(long)]
    pub table: Option<PathBuf>,
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
