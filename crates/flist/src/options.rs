/// Settings for a file listing run.
///
/// ```
/// use flist::ListOptions;
///
/// let options = ListOptions::new([".js", ".mjs"]).with_extension(".cjs").sort_entries(true);
/// assert_eq!(options.extensions(), [".js", ".mjs", ".cjs"]);
/// assert!(options.sorts_entries());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListOptions {
    extensions: Vec<String>,
    sort_entries: bool,
}

impl ListOptions {
    /// Creates options matching the given extension suffixes.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            sort_entries: false,
        }
    }

    /// Appends another extension suffix.
    #[must_use]
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extensions.push(extension.into());
        self
    }

    /// Controls whether directory children are sorted by name before they are
    /// visited. Disabled by default.
    #[must_use]
    pub const fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Returns the configured extension suffixes.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Reports whether directory children are sorted.
    #[must_use]
    pub const fn sorts_entries(&self) -> bool {
        self.sort_entries
    }
}
