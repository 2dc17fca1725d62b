//! Process collector for descriptor usage from `/proc/[pid]/`.

use crate::collector::procfs::parser::{parse_fd_limits, parse_pid};
use crate::collector::traits::FileSystem;
use crate::model::{FdLimits, ProcessFdUsage};
use std::io;
use std::path::Path;
use tracing::debug;

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// Process disappeared during collection.
    ProcessGone(u32),
    /// Process belongs to someone the caller may not inspect.
    PermissionDenied(u32),
    /// I/O error reading proc files.
    Io(io::Error),
    /// Parse error in proc files.
    Parse(String),
}

impl CollectError {
    /// Maps an I/O error on a per-process file to the expected failure kinds.
    fn from_process_io(pid: u32, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => CollectError::ProcessGone(pid),
            io::ErrorKind::PermissionDenied => CollectError::PermissionDenied(pid),
            _ => CollectError::Io(e),
        }
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::ProcessGone(pid) => write!(f, "process {} disappeared", pid),
            CollectError::PermissionDenied(pid) => {
                write!(f, "permission denied for process {}", pid)
            }
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CollectError {
    fn from(e: io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// Collects per-process descriptor information from `/proc/[pid]/` files.
pub struct ProcessCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcessCollector<F> {
    /// Creates a new process collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    pub fn proc_path(&self) -> &str {
        &self.proc_path
    }

    /// Lists the PIDs visible under the proc root, in ascending order.
    ///
    /// An unreadable proc root is returned as `CollectError::Io`; nothing
    /// useful can be reported without it.
    pub fn list_pids(&self) -> Result<Vec<u32>, CollectError> {
        let entries = self.fs.read_dir(Path::new(&self.proc_path))?;

        let mut pids: Vec<u32> = entries
            .iter()
            .filter(|entry| self.fs.is_dir(entry))
            .filter_map(|entry| entry.file_name().and_then(|n| n.to_str()).and_then(parse_pid))
            .collect();
        pids.sort_unstable();

        debug!(count = pids.len(), proc_path = %self.proc_path, "enumerated processes");
        Ok(pids)
    }

    /// Counts the entries of `/proc/[pid]/fd`.
    pub fn open_fd_count(&self, pid: u32) -> Result<u64, CollectError> {
        let fd_path = format!("{}/{}/fd", self.proc_path, pid);
        let entries = self
            .fs
            .read_dir(Path::new(&fd_path))
            .map_err(|e| CollectError::from_process_io(pid, e))?;
        Ok(entries.len() as u64)
    }

    /// Reads the open files limits from `/proc/[pid]/limits`.
    pub fn fd_limits(&self, pid: u32) -> Result<FdLimits, CollectError> {
        let limits_path = format!("{}/{}/limits", self.proc_path, pid);
        let content = self
            .fs
            .read_to_string(Path::new(&limits_path))
            .map_err(|e| CollectError::from_process_io(pid, e))?;
        parse_fd_limits(&content).map_err(|e| CollectError::Parse(e.message))
    }

    /// Collects limits and open descriptor count of one process.
    ///
    /// Both reads must succeed; a process that exits in between is reported
    /// as gone rather than with half its data.
    pub fn collect_process(&self, pid: u32) -> Result<ProcessFdUsage, CollectError> {
        let limits = self.fd_limits(pid)?;
        let open_files = self.open_fd_count(pid)?;

        Ok(ProcessFdUsage {
            pid,
            open_files,
            limits,
        })
    }
}
