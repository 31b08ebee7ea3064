// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Core types for the perfmon collector: run configuration, platform
//! identification, the command table model, and built-in tables.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod builtin;
pub mod config;
pub mod platform;
pub mod table;
pub mod time_fmt;

pub use config::{ConfigError, RunConfig, DEFAULT_DURATION_SECS, DEFAULT_INTERVAL_SECS};
pub use platform::{ParsePlatformError, Platform};
pub use table::{
    CommandTable, Discovery, Entry, ItemCommand, ProbeKind, Source, TableError,
    DEFAULT_COMMAND_TIMEOUT,
};
