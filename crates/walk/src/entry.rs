use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Kind of filesystem node recorded by the walker.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl EntryKind {
    /// Returns `true` for [`EntryKind::File`].
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` for [`EntryKind::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// A single file or directory visited during traversal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalkEntry {
    pub(crate) name: OsString,
    pub(crate) relative_path: PathBuf,
    pub(crate) full_path: PathBuf,
    pub(crate) kind: EntryKind,
    pub(crate) depth: usize,
}

impl WalkEntry {
    /// Returns the final path component of the entry.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the path relative to the traversal root.
    ///
    /// Relative paths never start with `./`; a child of the root is just its
    /// name.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the traversal root joined with [`relative_path`](Self::relative_path).
    ///
    /// The root is made absolute against the current directory before the
    /// walk starts, so this path is absolute as well.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Reports whether the entry is a file or a directory.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` when the entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Returns `true` when the entry is a regular file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Reports the depth of the entry; children of the root have depth `1`.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the entry and returns its relative path.
    #[must_use]
    pub fn into_relative_path(self) -> PathBuf {
        self.relative_path
    }
}
