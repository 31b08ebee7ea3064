// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp formatting for log records.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as `2026-01-30T08:14:09Z`.
pub fn format_utc_now() -> String {
    format_utc(Utc::now())
}

/// Format a UTC timestamp at second precision with a `Z` suffix.
pub fn format_utc(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
