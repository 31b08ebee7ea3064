// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! macOS diagnostic command table.

use crate::platform::Platform;
use crate::table::{CommandTable, Entry};

pub(super) fn table() -> CommandTable {
    CommandTable {
        platform: Platform::MacOs,
        preamble: vec![
            Entry::command("uname", &["uname", "-a"]),
            Entry::command("sw_vers", &["sw_vers"]),
        ],
        cycle: vec![
            // CPU and memory
            Entry::command("vm_stat", &["vm_stat"]),
            Entry::shell("cpu_sysctl", "sysctl -a | grep machdep.cpu"),
            Entry::command("mem_size", &["sysctl", "-n", "hw.memsize"]),
            Entry::command("top", &["top", "-l", "1"]),
            // Disk and I/O
            Entry::command("df", &["df", "-h"]),
            Entry::command("diskutil", &["diskutil", "list"]),
            Entry::command("disk_io", &["iostat", "-Id", "1", "2"]),
            // Processes
            Entry::command("processes", &["ps", "aux"]),
            Entry::command("top_processes", &["top", "-l", "1", "-n", "10"]),
            // Network
            Entry::command("netstat_interfaces", &["netstat", "-i"]),
            Entry::command("ifconfig", &["ifconfig"]),
            // Filesystems and NFS
            Entry::command("mount", &["mount"]),
            Entry::command("nfs_stats", &["nfsstat"]).optional(),
            // Unified log errors
            Entry::command(
                "error_logs",
                &[
                    "log",
                    "show",
                    "--predicate",
                    "eventMessage contains \"error\"",
                    "--info",
                ],
            ),
        ],
    }
}
