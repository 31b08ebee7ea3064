// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only run log: the single output artifact of a monitoring run.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use perfmon_core::time_fmt::format_utc_now;

/// Append-only writer for the collection log.
///
/// The file is opened once and the handle held for the lifetime of the
/// run; the collection loop is the only writer. Records are
/// human-readable timestamped lines and fenced sections:
///
/// ```text
/// 2026-01-30T08:14:09Z [disk_io] ok (1.2s)
/// 2026-01-30T08:14:09Z [disk_io] ```
/// <captured output>
/// 2026-01-30T08:14:10Z [disk_io] ```
/// ```
///
/// Write failures propagate: losing the log is the one fatal error of
/// a run.
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// Open (creating parents as needed) in create+append mode.
    ///
    /// An existing file is never truncated; a rerun against the same
    /// path appends after prior records.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line: `<ts> [<label>] <message>`.
    pub fn line(&mut self, label: &str, message: &str) -> std::io::Result<()> {
        writeln!(self.file, "{} [{}] {}", format_utc_now(), label, message)
    }

    /// Append a record: a headline, then the body in a fenced block.
    /// An empty body writes the headline alone.
    pub fn section(&mut self, label: &str, headline: &str, body: &str) -> std::io::Result<()> {
        self.line(label, headline)?;
        if body.is_empty() {
            return Ok(());
        }
        writeln!(self.file, "{} [{}] ```", format_utc_now(), label)?;
        write!(self.file, "{}", body)?;
        if !body.ends_with('\n') {
            writeln!(self.file)?;
        }
        writeln!(self.file, "{} [{}] ```", format_utc_now(), label)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
