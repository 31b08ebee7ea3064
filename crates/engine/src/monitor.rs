// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The collection loop: owns the cadence, the deadline, and the log.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use perfmon_core::table::{CommandTable, Entry, Source};
use perfmon_core::RunConfig;

use crate::discover;
use crate::exec;
use crate::probe::HostProbe;
use crate::record::{Capture, CaptureStatus};
use crate::sink::RunLog;

/// Label on loop bookkeeping lines (run banner, cycle headers).
const MONITOR_LABEL: &str = "monitor";

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Collection cycles performed (preamble excluded).
    pub cycles: u64,
    /// Log records written, preamble and expansions included.
    pub records: u64,
    pub elapsed: Duration,
}

/// The one fatal error of a run: the log itself is unavailable.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("cannot write log file {path}: {source}")]
    Log {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Bounded polling collector.
///
/// Owns the run configuration and (once running) the open log handle
/// for the whole process lifetime. Strictly sequential: one command at
/// a time, one cycle at a time.
pub struct Monitor {
    config: RunConfig,
    table: CommandTable,
    cancel: CancellationToken,
}

impl Monitor {
    pub fn new(config: RunConfig, table: CommandTable, cancel: CancellationToken) -> Self {
        Self {
            config,
            table,
            cancel,
        }
    }

    /// Run to the deadline (or cancellation) and return the summary.
    ///
    /// Command failures are data; the only error path is the log file.
    pub async fn run(self) -> Result<RunSummary, MonitorError> {
        let mut log = RunLog::open(&self.config.log_path).map_err(|e| self.log_err(e))?;
        let mut probe = HostProbe::new();

        let preamble = self.table.preamble.clone();
        let cycle_entries = self.table.cycle.clone();

        let start = Instant::now();
        let mut records = 0u64;
        let mut cycles = 0u64;

        tracing::info!(
            platform = %self.table.platform,
            log = %self.config.log_path.display(),
            interval_secs = self.config.interval.as_secs_f64(),
            duration_secs = self.config.duration.as_secs_f64(),
            "starting performance monitoring"
        );
        log.line(
            MONITOR_LABEL,
            &format!(
                "starting {} performance monitoring (interval {}s, duration {}s)",
                self.table.platform,
                self.config.interval.as_secs_f64(),
                self.config.duration.as_secs_f64(),
            ),
        )
        .map_err(|e| self.log_err(e))?;

        // One-shot system information before the first cycle.
        for entry in &preamble {
            if self.cancel.is_cancelled() {
                break;
            }
            records += self
                .execute_entry(entry, &mut probe, &mut log)
                .await
                .map_err(|e| self.log_err(e))?;
        }

        loop {
            if self.cancel.is_cancelled() {
                log.line(MONITOR_LABEL, "received shutdown signal, stopping")
                    .map_err(|e| self.log_err(e))?;
                break;
            }
            if start.elapsed() >= self.config.duration {
                break;
            }

            let cycle_start = Instant::now();
            cycles += 1;
            tracing::info!(cycle = cycles, "collecting system stats");
            log.line(
                MONITOR_LABEL,
                &format!("collecting system stats (cycle {cycles})"),
            )
            .map_err(|e| self.log_err(e))?;

            for entry in &cycle_entries {
                if self.cancel.is_cancelled() {
                    break;
                }
                records += self
                    .execute_entry(entry, &mut probe, &mut log)
                    .await
                    .map_err(|e| self.log_err(e))?;
            }

            // Sleep out the rest of the interval: overruns clamp to
            // zero, and the nap never extends past the run deadline.
            let nap = self
                .config
                .interval
                .saturating_sub(cycle_start.elapsed())
                .min(self.config.duration.saturating_sub(start.elapsed()));
            if !nap.is_zero() {
                tracing::debug!(secs = nap.as_secs_f64(), "sleeping until next cycle");
                tokio::select! {
                    _ = tokio::time::sleep(nap) => {}
                    _ = self.cancel.cancelled() => {}
                }
            }
        }

        let elapsed = start.elapsed();
        log.line(
            MONITOR_LABEL,
            &format!("performance monitoring completed ({cycles} cycles, {records} records)"),
        )
        .map_err(|e| self.log_err(e))?;
        tracing::info!(cycles, records, "performance monitoring completed");

        Ok(RunSummary {
            cycles,
            records,
            elapsed,
        })
    }

    /// Execute one table entry, appending its record(s).
    /// Returns how many records were written.
    async fn execute_entry(
        &self,
        entry: &Entry,
        probe: &mut HostProbe,
        log: &mut RunLog,
    ) -> std::io::Result<u64> {
        match &entry.source {
            Source::Probe(kind) => {
                let text = probe.sample(*kind);
                log.section(&entry.label, "ok", &text)?;
                Ok(1)
            }
            Source::Command { argv, fallback } => {
                let capture = match choose_argv(argv, fallback.as_deref(), entry.optional) {
                    Some(chosen) => exec::run(chosen, entry.timeout).await,
                    None => Capture::skipped(argv.clone(), argv.first().map_or("", String::as_str)),
                };
                self.write_record(log, &entry.label, &capture)?;
                Ok(1)
            }
            Source::Discover(discovery) => {
                let (listing, expanded) = discover::expand(discovery, entry.timeout).await;
                self.write_record(log, &entry.label, &listing)?;
                let mut written = 1u64;
                for command in expanded {
                    if self.cancel.is_cancelled() {
                        break;
                    }
                    let capture = exec::run(&command.argv, command.timeout).await;
                    let label = format!("{}.{}", entry.label, command.label);
                    self.write_record(log, &label, &capture)?;
                    written += 1;
                }
                Ok(written)
            }
        }
    }

    fn write_record(&self, log: &mut RunLog, label: &str, capture: &Capture) -> std::io::Result<()> {
        match &capture.status {
            CaptureStatus::Skipped { binary } => {
                tracing::debug!(label, binary = %binary, "optional command not installed");
            }
            status if !status.is_success() => {
                tracing::warn!(label, status = %status.headline(), "command failed");
            }
            _ => {}
        }
        log.section(label, &capture.headline(), &capture.body())
    }

    fn log_err(&self, source: std::io::Error) -> MonitorError {
        MonitorError::Log {
            path: self.config.log_path.clone(),
            source,
        }
    }
}

/// Pick what to run: the primary argv, its fallback when the primary
/// binary is absent, or nothing for an uninstalled optional entry.
/// A required entry with a missing binary still runs; the spawn
/// failure is the record.
fn choose_argv<'a>(
    argv: &'a [String],
    fallback: Option<&'a [String]>,
    optional: bool,
) -> Option<&'a [String]> {
    let Some(program) = argv.first() else {
        return Some(argv);
    };
    if exec::binary_on_path(program) {
        return Some(argv);
    }
    if let Some(fallback) = fallback {
        if fallback.first().is_some_and(|p| exec::binary_on_path(p)) {
            tracing::debug!(primary = %program, "primary binary missing, using fallback");
            return Some(fallback);
        }
    }
    if optional {
        return None;
    }
    Some(argv)
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
