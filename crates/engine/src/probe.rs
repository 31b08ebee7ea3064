// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in host samplers, the in-process complement to the external
//! diagnostic commands.
//!
//! One `HostProbe` lives for the whole run and is refreshed on each
//! sample, so CPU percentages are deltas between consecutive cycles.
//! The first cycle therefore reads near zero; later cycles are
//! accurate.

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use perfmon_core::table::ProbeKind;

/// Processes above this CPU percentage are reported by the process scan.
pub const HIGH_CPU_THRESHOLD: f32 = 50.0;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Host metric sampler owning the `sysinfo` state for a run.
pub struct HostProbe {
    system: System,
    disks: Disks,
    networks: Networks,
}

impl HostProbe {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        Self {
            system,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }

    /// Sample one probe and render it as log-ready text.
    pub fn sample(&mut self, kind: ProbeKind) -> String {
        match kind {
            ProbeKind::CpuMemory => self.cpu_memory(),
            ProbeKind::Swap => self.swap(),
            ProbeKind::DiskUsage => self.disk_usage(),
            ProbeKind::Network => self.network(),
            ProbeKind::Processes => self.processes(),
        }
    }

    fn cpu_memory(&mut self) -> String {
        self.system.refresh_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        let cpus = self.system.cpus();
        let per_core: Vec<f32> = cpus.iter().map(|cpu| cpu.cpu_usage()).collect();
        let overall = if per_core.is_empty() {
            0.0
        } else {
            per_core.iter().sum::<f32>() / per_core.len() as f32
        };

        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let available = self.system.available_memory();
        let percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let cores = per_core
            .iter()
            .map(|usage| format!("{usage:.1}%"))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "CPU Usage: {overall:.1}%\n\
             Per-Core: {cores}\n\
             Total Memory: {:.2} GB\n\
             Used Memory: {:.2} GB\n\
             Available Memory: {:.2} GB\n\
             Memory Usage: {percent:.1}%\n",
            total as f64 / GIB,
            used as f64 / GIB,
            available as f64 / GIB,
        )
    }

    fn swap(&mut self) -> String {
        self.system
            .refresh_specifics(RefreshKind::new().with_memory(MemoryRefreshKind::everything()));
        let total = self.system.total_swap();
        let used = self.system.used_swap();
        let free = self.system.free_swap();
        format!(
            "Total Swap: {:.2} GB\nUsed Swap: {:.2} GB\nFree Swap: {:.2} GB\n",
            total as f64 / GIB,
            used as f64 / GIB,
            free as f64 / GIB,
        )
    }

    fn disk_usage(&mut self) -> String {
        self.disks.refresh();
        if self.disks.list().is_empty() {
            return "(no mounted filesystems reported)\n".to_string();
        }
        let mut out = String::new();
        for disk in self.disks.list() {
            let total = disk.total_space();
            let available = disk.available_space();
            let used = total.saturating_sub(available);
            let percent = if total > 0 {
                used as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!(
                "Disk {} ({}, {}):\n  Total: {:.2} GB\n  Used: {:.2} GB\n  Free: {:.2} GB\n  Percent Used: {percent:.1}%\n",
                disk.name().to_string_lossy(),
                disk.mount_point().display(),
                disk.file_system().to_string_lossy(),
                total as f64 / GIB,
                used as f64 / GIB,
                available as f64 / GIB,
            ));
        }
        out
    }

    fn network(&mut self) -> String {
        self.networks.refresh();
        let mut sent = 0u64;
        let mut received = 0u64;
        let mut lines = Vec::new();
        for (name, data) in &self.networks {
            sent = sent.saturating_add(data.total_transmitted());
            received = received.saturating_add(data.total_received());
            lines.push(format!(
                "{name}: sent {:.2} MB, received {:.2} MB",
                data.total_transmitted() as f64 / MIB,
                data.total_received() as f64 / MIB,
            ));
        }
        lines.sort();
        let mut out = format!(
            "Bytes Sent: {:.2} MB\nBytes Received: {:.2} MB\n",
            sent as f64 / MIB,
            received as f64 / MIB,
        );
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn processes(&mut self) -> String {
        self.system.refresh_processes();
        let total_memory = self.system.total_memory();
        let mut hot: Vec<String> = self
            .system
            .processes()
            .values()
            .filter(|process| process.cpu_usage() > HIGH_CPU_THRESHOLD)
            .map(|process| {
                let mem_percent = if total_memory > 0 {
                    process.memory() as f64 / total_memory as f64 * 100.0
                } else {
                    0.0
                };
                format!(
                    "  PID {} {}: CPU {:.1}%, Mem {mem_percent:.1}%",
                    process.pid().as_u32(),
                    process.name(),
                    process.cpu_usage(),
                )
            })
            .collect();
        hot.sort();

        let mut out = format!("Processes above {HIGH_CPU_THRESHOLD:.0}% CPU:\n");
        if hot.is_empty() {
            out.push_str("  (none)\n");
        } else {
            for line in hot {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
