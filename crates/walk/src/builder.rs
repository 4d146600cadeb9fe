use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::walker::{EntryFilter, Walker};
use std::fmt;
use std::path::PathBuf;

/// Configures a filtered traversal rooted at a specific directory.
///
/// Filters may borrow from the caller; the builder is consumed by
/// [`walk`](Self::walk) and the borrow ends when traversal returns.
pub struct WalkBuilder<'a> {
    root: PathBuf,
    deep_filter: Option<EntryFilter<'a>>,
    entry_filter: Option<EntryFilter<'a>>,
    sort_entries: bool,
}

impl<'a> WalkBuilder<'a> {
    /// Creates a new builder that will traverse the provided root directory.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            deep_filter: None,
            entry_filter: None,
            sort_entries: false,
        }
    }

    /// Installs the predicate that decides whether a directory is entered.
    ///
    /// A directory rejected here is omitted from the result together with
    /// everything beneath it. Without a deep filter every directory is entered.
    #[must_use]
    pub fn deep_filter<F>(mut self, filter: F) -> Self
    where
        F: FnMut(&WalkEntry) -> bool + 'a,
    {
        self.deep_filter = Some(Box::new(filter));
        self
    }

    /// Installs the predicate that decides whether a file is kept.
    ///
    /// Without an entry filter every regular file is kept.
    #[must_use]
    pub fn entry_filter<F>(mut self, filter: F) -> Self
    where
        F: FnMut(&WalkEntry) -> bool + 'a,
    {
        self.entry_filter = Some(Box::new(filter));
        self
    }

    /// Controls whether each directory's children are sorted by name before
    /// they are processed.
    ///
    /// Disabled by default, in which case children follow the order reported
    /// by the directory read.
    #[must_use]
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Runs the traversal and returns every entry that survived filtering.
    pub fn walk(self) -> Result<Vec<WalkEntry>, WalkError> {
        let deep_filter = self.deep_filter.unwrap_or_else(|| Box::new(|_: &WalkEntry| true));
        let entry_filter = self.entry_filter.unwrap_or_else(|| Box::new(|_: &WalkEntry| true));
        Walker::new(self.root, deep_filter, entry_filter, self.sort_entries)?.run()
    }
}

impl fmt::Debug for WalkBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkBuilder")
            .field("root", &self.root)
            .field("deep_filter", &self.deep_filter.is_some())
            .field("entry_filter", &self.entry_filter.is_some())
            .field("sort_entries", &self.sort_entries)
            .finish()
    }
}
