//! System collector for kernel-wide descriptor settings.

use crate::collector::procfs::parser::parse_file_max;
use crate::collector::procfs::process::CollectError;
use crate::collector::traits::FileSystem;
use std::path::Path;

/// Collects system-wide descriptor settings from `/proc/sys/fs/`.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
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

    /// Path of the kernel's open file ceiling.
    pub fn file_max_path(&self) -> String {
        format!("{}/sys/fs/file-max", self.proc_path)
    }

    /// Reads the kernel-wide open file ceiling.
    pub fn collect_file_max(&self) -> Result<u64, CollectError> {
        let content = self.fs.read_to_string(Path::new(&self.file_max_path()))?;
        parse_file_max(&content).map_err(|e| CollectError::Parse(e.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_collect_file_max() {
        let collector = SystemCollector::new(MockFs::typical_system(), "/proc");
        assert_eq!(collector.collect_file_max().unwrap(), 1048576);
    }

    #[test]
    fn test_collect_file_max_missing() {
        let collector = SystemCollector::new(MockFs::without_file_max(), "/proc");
        assert!(matches!(
            collector.collect_file_max(),
            Err(CollectError::Io(_))
        ));
    }

    #[test]
    fn test_collect_file_max_garbage() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/sys/fs/file-max", "many\n");
        let collector = SystemCollector::new(fs, "/proc");
        assert!(matches!(
            collector.collect_file_max(),
            Err(CollectError::Parse(_))
        ));
    }

    #[test]
    fn test_file_max_path_follows_proc_root() {
        let collector = SystemCollector::new(MockFs::new(), "/host/proc");
        assert_eq!(collector.file_max_path(), "/host/proc/sys/fs/file-max");
    }
}
