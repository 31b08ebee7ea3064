// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! perfmon binary: wire configuration, table, and signals into the
//! collection loop.

use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use perfmon_core::{builtin, CommandTable, Platform, RunConfig};
use perfmon_engine::Monitor;

use crate::args::Args;
use crate::exit_error::ExitError;

mod args;
mod exit_error;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("perfmon: {err}");
        std::process::exit(err.code);
    }
}

/// Diagnostics go to stderr; the collection log is the product output.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<(), ExitError> {
    // Exit code 2: configuration and table problems, reported up front.
    let table = match &args.table {
        Some(path) => CommandTable::load(path).map_err(|e| ExitError::new(2, e.to_string()))?,
        None => builtin::table(args.platform.unwrap_or_else(Platform::detect)),
    };

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| RunConfig::default_log_path(table.platform));
    let config = RunConfig::new(
        Duration::from_secs(args.interval),
        Duration::from_secs(args.duration),
        log_path,
    )
    .map_err(|e| ExitError::new(2, e.to_string()))?;

    println!("logging to {}", config.log_path.display());

    let cancel = CancellationToken::new();
    spawn_signal_listener(cancel.clone());

    let monitor = Monitor::new(config, table, cancel);
    let summary = monitor
        .run()
        .await
        .map_err(|e| ExitError::new(1, e.to_string()))?;

    println!(
        "completed {} cycles ({} records) in {:.1}s",
        summary.cycles,
        summary.records,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}

/// Cancel the run on SIGINT, SIGTERM, or SIGHUP so the loop can write
/// its closing records before exiting.
fn spawn_signal_listener(cancel: CancellationToken) {
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        tracing::info!("shutdown signal received");
        cancel.cancel();
    });
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, Signal, SignalKind};

    async fn recv(slot: &mut Option<Signal>) {
        match slot {
            Some(sig) => {
                sig.recv().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    let mut term = signal(SignalKind::terminate()).ok();
    let mut hup = signal(SignalKind::hangup()).ok();
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = recv(&mut term) => {}
        _ = recv(&mut hup) => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
