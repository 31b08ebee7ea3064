// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Linux diagnostic command table.

use crate::platform::Platform;
use crate::table::{CommandTable, Entry, ProbeKind};

pub(super) fn table() -> CommandTable {
    CommandTable {
        platform: Platform::Linux,
        preamble: vec![
            Entry::command("uname", &["uname", "-a"]),
            Entry::command("lsb_release", &["lsb_release", "-a"]).optional(),
        ],
        cycle: vec![
            // CPU and memory
            Entry::probe("cpu_memory", ProbeKind::CpuMemory),
            Entry::shell("proc_stat", "cat /proc/stat | head -n 5"),
            // Disk usage and I/O; vmstat stands in where iostat is not installed
            Entry::probe("disk_usage", ProbeKind::DiskUsage),
            Entry::command("disk_io", &["iostat", "-xm", "1", "5"]).fallback(&["vmstat", "1", "5"]),
            // Network
            Entry::probe("net_counters", ProbeKind::Network),
            Entry::command("netstat_interfaces", &["netstat", "-i"]),
            Entry::command("socket_stats", &["ss", "-s"]),
            // Processes
            Entry::probe("hot_processes", ProbeKind::Processes),
            Entry::command("top", &["top", "-bn1"]),
            Entry::command("open_files", &["lsof"]),
            Entry::command("process_tree", &["pstree"]),
            // Paging and swap
            Entry::probe("swap", ProbeKind::Swap),
            Entry::command("vmstat", &["vmstat", "1", "5"]),
            // Filesystems
            Entry::command("df", &["df", "-h"]),
            Entry::command("mount", &["mount"]),
            Entry::command("var_usage", &["du", "-sh", "/var"]),
            // NFS
            Entry::command("nfs_server_stats", &["nfsstat", "-s"]).optional(),
            Entry::command("nfs_client_stats", &["nfsstat", "-c"]).optional(),
            Entry::shell("nfs_mounts", "grep nfs /proc/mounts"),
            // Recent system logs (Debian and Red Hat spellings)
            Entry::command("syslog_tail", &["tail", "-n", "50", "/var/log/syslog"]),
            Entry::command("messages_tail", &["tail", "-n", "50", "/var/log/messages"]),
        ],
    }
}
