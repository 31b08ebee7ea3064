// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command table model: what a monitoring run executes each cycle.
//!
//! A table is pure data. Built-in tables live in [`crate::builtin`];
//! custom tables can be loaded from TOML files (command entries only --
//! probes and discovery are built-in features).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::platform::Platform;

/// Wall-clock bound applied to a command unless the entry overrides it.
/// A hung diagnostic command is killed and recorded rather than stalling
/// the cycle indefinitely.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Built-in host samplers, rendered as text sections like any capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    /// CPU usage (overall and per core) plus memory totals.
    CpuMemory,
    /// Swap totals and usage.
    Swap,
    /// Per-mount disk space usage.
    DiskUsage,
    /// Network interface byte counters.
    Network,
    /// Processes currently above the high-CPU threshold.
    Processes,
}

/// One command run per discovered item, with `{}` substituted.
#[derive(Debug, Clone)]
pub struct ItemCommand {
    /// Short suffix appended to the item name to form the record label,
    /// e.g. `attrs` -> `hdisk0.attrs`.
    pub suffix: String,
    pub argv: Vec<String>,
    /// Overrides the parent entry's timeout when set.
    pub timeout: Option<Duration>,
}

impl ItemCommand {
    pub fn new(suffix: &str, argv: &[&str]) -> Self {
        Self {
            suffix: suffix.to_string(),
            argv: argv.iter().map(|s| s.to_string()).collect(),
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Run a listing command, take the first whitespace field of each output
/// line as an item, then run every item command once per item.
///
/// One level of expansion only.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub list_argv: Vec<String>,
    /// Header lines to drop from the listing output.
    pub skip_lines: usize,
    pub item_commands: Vec<ItemCommand>,
}

/// Where an entry's output comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// An external process to spawn and capture.
    Command {
        argv: Vec<String>,
        /// Runs instead when the primary binary is absent from `PATH`.
        fallback: Option<Vec<String>>,
    },
    /// A listing command expanded into per-item commands.
    Discover(Discovery),
    /// A built-in host sampler.
    Probe(ProbeKind),
}

/// One row of a command table.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Unique within the table; names the record sections in the log.
    pub label: String,
    pub source: Source,
    /// Optional entries whose binary is missing are recorded as skipped
    /// instead of failed. Either way the cycle continues.
    pub optional: bool,
    pub timeout: Duration,
}

impl Entry {
    pub fn command(label: &str, argv: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            source: Source::Command {
                argv: argv.iter().map(|s| s.to_string()).collect(),
                fallback: None,
            },
            optional: false,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// A `sh -c` pipeline entry, for commands the table bounds with
    /// `head` and the like.
    pub fn shell(label: &str, script: &str) -> Self {
        Self::command(label, &["sh", "-c", script])
    }

    pub fn probe(label: &str, kind: ProbeKind) -> Self {
        Self {
            label: label.to_string(),
            source: Source::Probe(kind),
            optional: false,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn discover(
        label: &str,
        list_argv: &[&str],
        skip_lines: usize,
        item_commands: Vec<ItemCommand>,
    ) -> Self {
        Self {
            label: label.to_string(),
            source: Source::Discover(Discovery {
                list_argv: list_argv.iter().map(|s| s.to_string()).collect(),
                skip_lines,
                item_commands,
            }),
            optional: false,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set a fallback argv; only meaningful on command entries.
    pub fn fallback(mut self, argv: &[&str]) -> Self {
        if let Source::Command { fallback, .. } = &mut self.source {
            *fallback = Some(argv.iter().map(|s| s.to_string()).collect());
        }
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// An ordered command table for one platform.
///
/// `preamble` entries run exactly once at startup; `cycle` entries run
/// every tick, in order.
#[derive(Debug, Clone)]
pub struct CommandTable {
    pub platform: Platform,
    pub preamble: Vec<Entry>,
    pub cycle: Vec<Entry>,
}

impl CommandTable {
    /// Build a table, rejecting duplicate labels and malformed entries.
    pub fn new(
        platform: Platform,
        preamble: Vec<Entry>,
        cycle: Vec<Entry>,
    ) -> Result<Self, TableError> {
        let table = Self {
            platform,
            preamble,
            cycle,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check table invariants: at least one entry, unique labels,
    /// non-empty argvs, and a `{}` placeholder in every item command.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.preamble.is_empty() && self.cycle.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for entry in self.preamble.iter().chain(&self.cycle) {
            if !seen.insert(entry.label.as_str()) {
                return Err(TableError::DuplicateLabel(entry.label.clone()));
            }
            match &entry.source {
                Source::Command { argv, fallback } => {
                    if argv.is_empty() || fallback.as_ref().is_some_and(|f| f.is_empty()) {
                        return Err(TableError::EmptyArgv {
                            label: entry.label.clone(),
                        });
                    }
                }
                Source::Discover(discovery) => {
                    if discovery.list_argv.is_empty() || discovery.item_commands.is_empty() {
                        return Err(TableError::EmptyArgv {
                            label: entry.label.clone(),
                        });
                    }
                    for item in &discovery.item_commands {
                        if item.argv.is_empty() {
                            return Err(TableError::EmptyArgv {
                                label: entry.label.clone(),
                            });
                        }
                        if !item.argv.iter().any(|a| a.contains("{}")) {
                            return Err(TableError::MissingPlaceholder {
                                label: entry.label.clone(),
                            });
                        }
                    }
                }
                Source::Probe(_) => {}
            }
        }
        Ok(())
    }

    /// Load a custom table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let text = std::fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a custom table from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, TableError> {
        let raw: RawTable = toml::from_str(text)?;
        let preamble = raw.preamble.into_iter().map(RawEntry::into_entry).collect();
        let cycle = raw.cycle.into_iter().map(RawEntry::into_entry).collect();
        Self::new(raw.platform, preamble, cycle)
    }
}

// ---------------------------------------------------------------------------
// TOML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    platform: Platform,
    #[serde(default)]
    preamble: Vec<RawEntry>,
    #[serde(default)]
    cycle: Vec<RawEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    label: String,
    argv: Vec<String>,
    #[serde(default)]
    fallback: Option<Vec<String>>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl RawEntry {
    fn into_entry(self) -> Entry {
        Entry {
            label: self.label,
            source: Source::Command {
                argv: self.argv,
                fallback: self.fallback,
            },
            optional: self.optional,
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_COMMAND_TIMEOUT),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("duplicate command label `{0}`")]
    DuplicateLabel(String),

    #[error("entry `{label}` has an empty argv")]
    EmptyArgv { label: String },

    #[error("discovery entry `{label}` has an item command without a `{{}}` placeholder")]
    MissingPlaceholder { label: String },

    #[error("command table has no entries")]
    Empty,

    #[error("cannot read table file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
