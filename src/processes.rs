use std::fs;
use std::path::{Path, PathBuf};

/// Correlates socket inodes to owning processes by walking per-process file
/// descriptor links. There is no inode-to-pid index on this platform, so
/// every lookup is a linear sweep over all live descriptors.
pub struct ProcessResolver {
    proc_root: PathBuf,
}

impl Default for ProcessResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessResolver {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: root.into(),
        }
    }

    /// Find the pid owning a socket by scanning every visible process's open
    /// descriptors for a link target containing the inode token. The first
    /// match in enumeration order wins; a socket shared after fork reports
    /// only one owner. Unreadable entries (process gone, permission denied)
    /// are skipped, not errors.
    pub fn pid_for_inode(&self, inode: &str) -> Option<u32> {
        let entries = fs::read_dir(&self.proc_root).ok()?;

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(pid) = name.to_str().and_then(|n| n.parse::<u32>().ok()) else {
                continue;
            };

            if self.process_references_inode(&entry.path(), inode) {
                return Some(pid);
            }
        }

        None
    }

    fn process_references_inode(&self, proc_dir: &Path, inode: &str) -> bool {
        let Ok(fds) = fs::read_dir(proc_dir.join("fd")) else {
            return false;
        };

        for fd in fds.flatten() {
            if let Ok(target) = fs::read_link(fd.path()) {
                if target.to_string_lossy().contains(inode) {
                    return true;
                }
            }
        }

        false
    }

    /// Display name for a pid: the final segment of its executable link.
    /// `None` if the process is gone or the link is unreadable.
    pub fn program_name_for_pid(&self, pid: u32) -> Option<String> {
        let exe = fs::read_link(self.proc_root.join(pid.to_string()).join("exe")).ok()?;
        exe.file_name().map(|n| n.to_string_lossy().into_owned())
    }
}
