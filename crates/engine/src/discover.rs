// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery expansion: a listing command names items (disks, volume
//! groups), then per-item commands run with `{}` substituted.

use std::time::Duration;

use perfmon_core::table::Discovery;

use crate::exec;
use crate::record::Capture;

/// A per-item command ready to execute.
#[derive(Debug, Clone)]
pub struct ExpandedCommand {
    /// `<item>.<suffix>`, e.g. `hdisk0.attrs`.
    pub label: String,
    pub argv: Vec<String>,
    pub timeout: Duration,
}

/// Run the listing command and expand its items.
///
/// The listing capture is returned either way; expansion happens only
/// when the listing succeeded. A failed listing is an ordinary failure
/// record with nothing behind it.
pub async fn expand(
    discovery: &Discovery,
    default_timeout: Duration,
) -> (Capture, Vec<ExpandedCommand>) {
    let listing = exec::run(&discovery.list_argv, default_timeout).await;

    let mut expanded = Vec::new();
    if listing.status.is_success() {
        for item in items(&listing.stdout, discovery.skip_lines) {
            for command in &discovery.item_commands {
                expanded.push(ExpandedCommand {
                    label: format!("{item}.{}", command.suffix),
                    argv: command
                        .argv
                        .iter()
                        .map(|arg| arg.replace("{}", &item))
                        .collect(),
                    timeout: command.timeout.unwrap_or(default_timeout),
                });
            }
        }
    }
    (listing, expanded)
}

/// First whitespace field of each listing line, headers skipped.
fn items(stdout: &str, skip_lines: usize) -> Vec<String> {
    stdout
        .lines()
        .skip(skip_lines)
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
