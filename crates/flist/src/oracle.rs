use std::fmt;
use std::path::Path;

/// Decides whether paths are excluded by external policy.
///
/// The lister never interprets why a path is ignored; ignore files,
/// configuration and defaults all live behind this trait. Both methods receive
/// absolute paths.
pub trait IgnoreOracle {
    /// Returns `true` when the directory at `path` must not be entered.
    fn is_directory_ignored(&self, path: &Path) -> bool;

    /// Returns `true` when the file at `path` must not be listed.
    fn is_file_ignored(&self, path: &Path) -> bool;
}

impl<T: IgnoreOracle + ?Sized> IgnoreOracle for &T {
    fn is_directory_ignored(&self, path: &Path) -> bool {
        (**self).is_directory_ignored(path)
    }

    fn is_file_ignored(&self, path: &Path) -> bool {
        (**self).is_file_ignored(path)
    }
}

impl<T: IgnoreOracle + ?Sized> IgnoreOracle for Box<T> {
    fn is_directory_ignored(&self, path: &Path) -> bool {
        (**self).is_directory_ignored(path)
    }

    fn is_file_ignored(&self, path: &Path) -> bool {
        (**self).is_file_ignored(path)
    }
}

/// Oracle that ignores nothing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoIgnore;

impl IgnoreOracle for NoIgnore {
    fn is_directory_ignored(&self, _path: &Path) -> bool {
        false
    }

    fn is_file_ignored(&self, _path: &Path) -> bool {
        false
    }
}

/// Oracle built from a directory predicate and a file predicate.
#[derive(Clone)]
pub struct FnOracle<D, F> {
    directory: D,
    file: F,
}

impl<D, F> FnOracle<D, F>
where
    D: Fn(&Path) -> bool,
    F: Fn(&Path) -> bool,
{
    /// Creates an oracle from the two predicates.
    pub const fn new(directory: D, file: F) -> Self {
        Self { directory, file }
    }
}

impl<D, F> IgnoreOracle for FnOracle<D, F>
where
    D: Fn(&Path) -> bool,
    F: Fn(&Path) -> bool,
{
    fn is_directory_ignored(&self, path: &Path) -> bool {
        (self.directory)(path)
    }

    fn is_file_ignored(&self, path: &Path) -> bool {
        (self.file)(path)
    }
}

impl<D, F> fmt::Debug for FnOracle<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOracle").finish_non_exhaustive()
    }
}
