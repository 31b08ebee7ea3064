// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform identification for command table selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platforms with a built-in command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Aix,
}

impl Platform {
    /// Detect the platform from the build target.
    ///
    /// There is no Rust target for AIX here, so AIX is reachable only via
    /// an explicit `--platform aix` or a custom table file. Unknown
    /// targets fall back to the Linux table.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Spelling used in the log file name, matching the historical
    /// `<Platform>_Perf_Monitor_<pid>.log` pattern.
    pub fn log_stem(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOs => "MacOS",
            Platform::Aix => "AIX",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Aix => "aix",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, thiserror::Error)]
#[error("unknown platform `{0}` (expected linux, macos, or aix)")]
pub struct ParsePlatformError(String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "aix" => Ok(Platform::Aix),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
