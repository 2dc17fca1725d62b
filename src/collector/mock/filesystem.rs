//! In-memory mock filesystem for testing collectors without a real `/proc`.

use crate::collector::traits::FileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Paths marked with [`MockFs::deny`] fail with `PermissionDenied`, which is
/// how `/proc/[pid]/fd` of another user's process behaves.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: BTreeMap<PathBuf, String>,
    /// Set of directories (for read_dir support).
    directories: BTreeSet<PathBuf>,
    /// Paths whose reads fail with `PermissionDenied`.
    denied: BTreeSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content. Parent directories are created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory. Parent directories are created.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Makes every read of `path` fail with `PermissionDenied`.
    ///
    /// The path still shows up in its parent's listing.
    pub fn deny(&mut self, path: impl AsRef<Path>) {
        self.denied.insert(path.as_ref().to_path_buf());
    }

    /// Removes a file or a whole directory subtree, as if a process exited.
    pub fn remove(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.files.retain(|p, _| !p.starts_with(path));
        self.directories.retain(|p| !p.starts_with(path));
        self.denied.retain(|p| !p.starts_with(path));
    }

    /// Adds a process with its `limits` file and `open_files` descriptors
    /// under `/proc/[pid]/`.
    ///
    /// # Arguments
    /// * `pid` - Process ID
    /// * `limits` - Content of `/proc/[pid]/limits`
    /// * `open_files` - Number of entries to create in `/proc/[pid]/fd`
    pub fn add_process(&mut self, pid: u32, limits: &str, open_files: u64) {
        let base = PathBuf::from(format!("/proc/{}", pid));
        self.add_dir(&base);
        self.add_file(base.join("limits"), limits);

        let fd_dir = base.join("fd");
        self.add_dir(&fd_dir);
        for fd in 0..open_files {
            // Real entries are symlinks; the content is only informational.
            self.add_file(fd_dir.join(fd.to_string()), "/dev/null");
        }
    }

    /// True if a file or directory was added at `path`.
    #[cfg(test)]
    pub(crate) fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }

    fn check_access(&self, path: &Path) -> io::Result<()> {
        if self.denied.iter().any(|d| path.starts_with(d)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {:?}", path),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.check_access(path)?;
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        self.check_access(path)?;
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {:?}", path),
            ));
        }

        let mut entries = BTreeSet::new();

        for file_path in self.files.keys() {
            if file_path.parent().is_some_and(|parent| parent == path) {
                entries.insert(file_path.clone());
            }
        }

        for dir_path in &self.directories {
            if dir_path.parent().is_some_and(|parent| parent == path) && dir_path != path {
                entries.insert(dir_path.clone());
            }
        }

        Ok(entries.into_iter().collect())
    }
}
