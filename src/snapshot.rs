use crate::config::Config;
use crate::connections::{self, ConnectionRecord};
use crate::display;
use crate::error::Result;
use crate::hostname::HostResolver;
use crate::processes::ProcessResolver;
use std::path::PathBuf;

/// One fully rendered connection listing for one poll cycle. Two snapshots
/// are equal iff their ordered line sequences are identical; reordered rows
/// count as a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    lines: Vec<String>,
}

impl Snapshot {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Drives the per-cycle pipeline: load each requested table, decode its
/// rows, drop rows without a remote peer, correlate the survivors to owning
/// processes, resolve remote hosts, and render fixed-width lines.
pub struct SnapshotBuilder {
    config: Config,
    proc_root: PathBuf,
    processes: ProcessResolver,
    hosts: HostResolver,
}

impl SnapshotBuilder {
    pub fn new(config: Config) -> Self {
        Self::with_root(config, "/proc")
    }

    pub fn with_root(config: Config, proc_root: impl Into<PathBuf>) -> Self {
        let proc_root = proc_root.into();
        let processes = ProcessResolver::with_root(&proc_root);
        let hosts = HostResolver::new(config.resolve_dns);
        Self {
            config,
            proc_root,
            processes,
            hosts,
        }
    }

    /// Build a fresh snapshot from live kernel state. An unreadable table
    /// for a requested protocol is fatal to the cycle; everything below the
    /// table read degrades per-row instead of failing.
    pub fn build(&self) -> Result<Snapshot> {
        let mut lines = Vec::new();

        for &protocol in &self.config.protocols {
            for raw in connections::load_table(protocol, &self.proc_root)? {
                let mut record = ConnectionRecord::decode(protocol, &raw)?;
                if !record.has_remote_peer() {
                    continue;
                }

                record.owner_pid = self.processes.pid_for_inode(&record.inode);
                record.owner_program = record
                    .owner_pid
                    .and_then(|pid| self.processes.program_name_for_pid(pid));
                record.remote_host = Some(self.hosts.resolve(record.remote_addr));

                lines.push(display::format_row(&record));
            }
        }

        Ok(Snapshot { lines })
    }
}
