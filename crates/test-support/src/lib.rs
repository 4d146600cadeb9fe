//! Shared fixtures for lintwalk tests.
//!
//! [`SourceTree`] lays out throwaway directory trees inside a temporary
//! directory that is removed when the fixture is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory tree built up from relative paths.
///
/// Paths ending in `/` create directories; every other path creates an empty
/// file, creating missing parent directories on the way.
///
/// ```
/// let tree = test_support::SourceTree::with_paths(&["a.js", "sub/", "sub/c.js"]);
/// assert!(tree.join("sub/c.js").is_file());
/// ```
#[derive(Debug)]
pub struct SourceTree {
    temp: TempDir,
}

impl SourceTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("create tempdir"),
        }
    }

    /// Creates a tree populated with `paths`, in order.
    pub fn with_paths(paths: &[&str]) -> Self {
        let tree = Self::new();
        for path in paths {
            tree.add(path);
        }
        tree
    }

    /// Adds a single file or (with a trailing `/`) directory.
    pub fn add(&self, relative: &str) -> PathBuf {
        if let Some(dir) = relative.strip_suffix('/') {
            self.dir(dir)
        } else {
            self.file(relative, b"")
        }
    }

    /// Creates `relative` and any missing parents as directories.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Writes `contents` to `relative`, creating missing parent directories.
    pub fn file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Returns the root of the tree.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Joins `relative` onto the root of the tree.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts string literals into owned relative paths for assertions.
pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
