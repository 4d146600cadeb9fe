use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when traversal fails.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn file_type(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::FileType { path, source })
    }

    pub(crate) fn current_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::CurrentDir { path, source })
    }

    /// Returns the specific failure that terminated traversal.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// # Examples
    ///
    /// ```
    /// let error = walk::walk("./definitely_missing_root").unwrap_err();
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the [`io::ErrorKind`] reported by the operating system.
    #[must_use]
    pub fn io_kind(&self) -> io::ErrorKind {
        self.kind.source().kind()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to read directory '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::ReadDirEntry { path, source } => {
                write!(
                    f,
                    "failed to read entry in '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::FileType { path, source } => {
                write!(
                    f,
                    "failed to determine file type of '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::CurrentDir { path, source } => {
                write!(
                    f,
                    "failed to resolve '{}' against the current directory: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.kind.source())
    }
}

/// Classification of traversal failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// Failed to open a directory for reading. A missing root, or a root that
    /// is not a directory, is reported here.
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to determine whether an entry is a file or a directory.
    FileType {
        /// Entry whose type could not be determined.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to read the current directory while making a relative root absolute.
    CurrentDir {
        /// Relative root that could not be resolved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::FileType { path, .. }
            | Self::CurrentDir { path, .. } => path,
        }
    }

    fn source(&self) -> &io::Error {
        match self {
            Self::ReadDir { source, .. }
            | Self::ReadDirEntry { source, .. }
            | Self::FileType { source, .. }
            | Self::CurrentDir { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk;

    #[test]
    fn missing_root_reports_read_dir_with_os_cause() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("gone");

        let error = walk(&missing).expect_err("missing root");
        assert!(matches!(error.kind(), WalkErrorKind::ReadDir { .. }));
        assert_eq!(error.kind().path(), missing);
        assert!(
            error
                .to_string()
                .starts_with(&format!("failed to read directory '{}': ", missing.display()))
        );

        let cause = error
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .expect("io cause");
        assert_eq!(cause.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn file_root_reports_not_a_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("index.js");
        std::fs::write(&file, b"export {}").expect("write");

        let error = walk(&file).expect_err("file root");
        assert_eq!(error.path(), file);
        assert_eq!(error.io_kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn relative_root_failure_names_the_unresolved_root() {
        let error = WalkError::current_dir(
            PathBuf::from("src"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(error.path(), Path::new("src"));
        assert!(
            error
                .to_string()
                .starts_with("failed to resolve 'src' against the current directory: ")
        );
    }

    #[test]
    fn entry_failures_name_the_child_path() {
        let error = WalkError::file_type(
            PathBuf::from("/work/src/socket"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(error.kind(), WalkErrorKind::FileType { .. }));
        assert_eq!(error.io_kind(), io::ErrorKind::PermissionDenied);
        assert!(
            error
                .to_string()
                .starts_with("failed to determine file type of '/work/src/socket': ")
        );
    }
}
