//! Abstractions for filesystem access so collectors can run against mocks.
//!
//! The `FileSystem` trait lets the reporter read the real `/proc` tree on
//! Linux, a copied proc tree under another root, or an in-memory `MockFs`.

use std::io;
use std::path::{Path, PathBuf};

/// Abstraction for the filesystem operations the collectors need.
pub trait FileSystem {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists entries in a directory.
    ///
    /// # Returns
    /// Full paths of the directory's entries in no particular order,
    /// or an I/O error if the directory cannot be read.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_real_fs_read_to_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file-max");
        fs::write(&path, "9223372036854775807\n").unwrap();

        let content = RealFs::new().read_to_string(&path).unwrap();
        assert_eq!(content, "9223372036854775807\n");
    }

    #[test]
    fn test_real_fs_is_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("limits");
        fs::write(&file, "").unwrap();

        let fs = RealFs::new();
        assert!(!fs.is_dir(&file));
        assert!(fs.is_dir(dir.path()));
        assert!(!fs.is_dir(Path::new("/nonexistent/path/12345")));
    }

    #[test]
    fn test_real_fs_read_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("1")).unwrap();
        fs::create_dir(dir.path().join("42")).unwrap();
        fs::write(dir.path().join("uptime"), "1.0 2.0\n").unwrap();

        let mut names: Vec<String> = RealFs::new()
            .read_dir(dir.path())
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        names.sort();
        assert_eq!(names, vec!["1", "42", "uptime"]);
    }

    #[test]
    fn test_real_fs_read_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = RealFs::new().read_dir(&dir.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
