// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AIX diagnostic command table.
//!
//! Disk and volume-group sections are discovery entries: `lspv` and
//! `lsvg` name the items, then per-item commands run with the item
//! substituted for `{}`.

use std::time::Duration;

use crate::platform::Platform;
use crate::table::{CommandTable, Entry, ItemCommand};

pub(super) fn table() -> CommandTable {
    CommandTable {
        platform: Platform::Aix,
        preamble: vec![
            Entry::command("uname", &["uname", "-a"]),
            Entry::command("oslevel", &["oslevel", "-s"]),
            Entry::command("system_attrs", &["lsattr", "-El", "sys0"]),
            Entry::command("pmcycles", &["pmcycles", "-d"]),
            Entry::command("lparstat", &["lparstat", "-i"]),
        ],
        cycle: vec![
            // Physical volumes, then per-disk attributes and I/O stats
            Entry::discover(
                "disks",
                &["lspv"],
                0,
                vec![
                    ItemCommand::new("attrs", &["lsattr", "-El", "{}"]),
                    ItemCommand::new("io", &["iostat", "-DlR", "{}", "1", "1"])
                        .timeout(Duration::from_secs(30)),
                ],
            ),
            // Network
            Entry::command("netstat_detail", &["netstat", "-v"]),
            Entry::command("entstat_ent0", &["entstat", "-d", "ent0"]),
            Entry::command("ifconfig", &["ifconfig", "-a"]),
            // CPU and memory
            Entry::command("vmstat", &["vmstat", "1", "3"]),
            Entry::command("sys_tunables", &["lsattr", "-El", "sys0"]),
            Entry::command("mpstat", &["mpstat", "1", "3"]),
            Entry::shell("memory_affinity", "svmon -G -O affinity=on | head -n 20"),
            // Volume groups and their logical/physical volumes
            Entry::discover(
                "volume_groups",
                &["lsvg"],
                0,
                vec![
                    ItemCommand::new("info", &["lsvg", "{}"]),
                    ItemCommand::new("logical_volumes", &["lsvg", "-l", "{}"]),
                    ItemCommand::new("physical_volumes", &["lsvg", "-p", "{}"]),
                ],
            ),
            // Processes
            Entry::command("processes", &["ps", "-ef"]),
            Entry::command("memory_global", &["svmon", "-G"]),
            Entry::shell("memory_by_process", "svmon -P | head -n 20"),
            Entry::command("topas", &["topas"]),
            // Paging
            Entry::command("paging_spaces", &["lsps", "-a"]),
            Entry::command("vm_counters", &["vmstat", "-s"]),
            // Filesystems and NFS
            Entry::command("filesystems", &["lsfs"]),
            Entry::command("nfs_server_stats", &["nfsstat", "-s"]).optional(),
            Entry::command("nfs_client_stats", &["nfsstat", "-c"]).optional(),
            Entry::command("mount", &["mount"]),
            // Error report
            Entry::shell("error_report", "errpt -a | head -n 20"),
        ],
    }
}
