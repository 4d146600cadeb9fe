//! Selection of a single file-listing implementation.
//!
//! Host linting engines have exposed file enumeration in different places
//! over their history. Rather than nesting lookups and treating "not found"
//! failures as control flow, callers describe every candidate location as a
//! [`ProviderProbe`] and hand the ordered list to [`select_provider`] once at
//! startup. The first probe that yields a provider wins:
//!
//! - a probe reporting [`ProbeError::NotFound`] is skipped;
//! - a probe reporting [`ProbeError::Failed`] stops selection immediately;
//! - when every probe is skipped, [`SelectError::NoProvider`] lists the
//!   locations that were tried.
//!
//! Providers that enumerate [`EnumeratedFile`] records rather than plain paths
//! are wrapped in an [`EnumeratingProvider`], which drops ignored records.
//!
//! ```
//! use flist::NoIgnore;
//! use flist::provider::{ProbeError, ProviderProbe, WalkProvider, select_provider};
//!
//! let probes = vec![
//!     ProviderProbe::new("engine/legacy-enumerator", || {
//!         Err(ProbeError::not_found("engine/legacy-enumerator"))
//!     }),
//!     ProviderProbe::available("walk", WalkProvider::new(NoIgnore)),
//! ];
//!
//! let provider = select_provider(probes).unwrap();
//! assert_eq!(provider.name(), "walk");
//! ```

use crate::lister::list_files_with;
use crate::options::ListOptions;
use crate::oracle::IgnoreOracle;
use logging::{trace_filter, trace_provider};
use std::fmt;
use std::path::{Path, PathBuf};
use walk::WalkError;

/// Failure reported by a [`FileProvider`] while listing files.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The built-in walker failed to read a directory.
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// An enumeration-style provider reported a failure.
    #[error("file enumeration failed: {0}")]
    Enumeration(String),
}

/// An implementation of source file listing.
pub trait FileProvider {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Lists files under `roots` whose paths end with one of `extensions`.
    fn list_files(
        &self,
        roots: &[PathBuf],
        extensions: &[String],
    ) -> Result<Vec<PathBuf>, ProviderError>;
}

/// Provider selected by [`select_provider`].
pub type BoxedProvider<'a> = Box<dyn FileProvider + 'a>;

/// Provider backed by the directory walker and an [`IgnoreOracle`].
#[derive(Clone, Debug)]
pub struct WalkProvider<O> {
    oracle: O,
    sort_entries: bool,
}

impl<O: IgnoreOracle> WalkProvider<O> {
    /// Creates a provider consulting `oracle`.
    pub const fn new(oracle: O) -> Self {
        Self {
            oracle,
            sort_entries: false,
        }
    }

    /// Controls whether directory children are sorted by name.
    #[must_use]
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }
}

impl<O: IgnoreOracle> FileProvider for WalkProvider<O> {
    fn name(&self) -> &str {
        "walk"
    }

    fn list_files(
        &self,
        roots: &[PathBuf],
        extensions: &[String],
    ) -> Result<Vec<PathBuf>, ProviderError> {
        let options = ListOptions::new(extensions.iter().cloned()).sort_entries(self.sort_entries);
        Ok(list_files_with(roots, &options, &self.oracle)?)
    }
}

/// One record produced by an enumeration-style provider.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumeratedFile {
    /// Path of the enumerated file.
    pub path: PathBuf,
    /// Whether the host considers the file ignored.
    pub ignored: bool,
}

impl EnumeratedFile {
    /// Creates a record for a file that is not ignored.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ignored: false,
        }
    }

    /// Creates a record for an ignored file.
    pub fn ignored<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ignored: true,
        }
    }
}

/// Adapts a per-root enumeration function to the [`FileProvider`] contract.
///
/// The function is called once per root, in order. Records flagged as
/// ignored are dropped and the remaining paths are concatenated.
pub struct EnumeratingProvider<F> {
    name: String,
    enumerate: F,
}

impl<F> EnumeratingProvider<F>
where
    F: Fn(&Path, &[String]) -> Result<Vec<EnumeratedFile>, ProviderError>,
{
    /// Creates a provider named `name` that delegates to `enumerate`.
    pub fn new<N: Into<String>>(name: N, enumerate: F) -> Self {
        Self {
            name: name.into(),
            enumerate,
        }
    }
}

impl<F> FileProvider for EnumeratingProvider<F>
where
    F: Fn(&Path, &[String]) -> Result<Vec<EnumeratedFile>, ProviderError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn list_files(
        &self,
        roots: &[PathBuf],
        extensions: &[String],
    ) -> Result<Vec<PathBuf>, ProviderError> {
        let mut files = Vec::new();
        for root in roots {
            for record in (self.enumerate)(root, extensions)? {
                if record.ignored {
                    trace_filter!("{} reported {:?} as ignored", self.name, record.path);
                    continue;
                }
                files.push(record.path);
            }
        }
        Ok(files)
    }
}

impl<F> fmt::Debug for EnumeratingProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumeratingProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Outcome of a probe that did not yield a provider.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProbeError {
    /// Nothing is available at the probed location; the next probe is tried.
    #[error("no file provider found at {location}")]
    NotFound {
        /// Location that was probed.
        location: String,
    },
    /// The location exists but could not be loaded; selection stops.
    #[error("failed to load file provider from {location}: {message}")]
    Failed {
        /// Location that was probed.
        location: String,
        /// Description of the failure.
        message: String,
    },
}

impl ProbeError {
    /// Creates a [`ProbeError::NotFound`] for `location`.
    pub fn not_found<L: Into<String>>(location: L) -> Self {
        Self::NotFound {
            location: location.into(),
        }
    }

    /// Creates a [`ProbeError::Failed`] for `location`.
    pub fn failed<L: Into<String>, M: Into<String>>(location: L, message: M) -> Self {
        Self::Failed {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for [`ProbeError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

type ProbeCheck<'a> = Box<dyn FnOnce() -> Result<BoxedProvider<'a>, ProbeError> + 'a>;

/// A single candidate location for a file provider.
pub struct ProviderProbe<'a> {
    location: String,
    check: ProbeCheck<'a>,
}

impl<'a> ProviderProbe<'a> {
    /// Creates a probe for `location` that runs `check` when evaluated.
    pub fn new<L, C>(location: L, check: C) -> Self
    where
        L: Into<String>,
        C: FnOnce() -> Result<BoxedProvider<'a>, ProbeError> + 'a,
    {
        Self {
            location: location.into(),
            check: Box::new(check),
        }
    }

    /// Creates a probe that always yields `provider`.
    pub fn available<L, P>(location: L, provider: P) -> Self
    where
        L: Into<String>,
        P: FileProvider + 'a,
    {
        Self::new(location, move || Ok(Box::new(provider) as BoxedProvider<'a>))
    }

    /// Returns the probed location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    fn probe(self) -> Result<BoxedProvider<'a>, ProbeError> {
        (self.check)()
    }
}

impl fmt::Debug for ProviderProbe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderProbe")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Failure to select a provider.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// A probe failed for a reason other than the provider being absent.
    #[error(transparent)]
    Probe(ProbeError),
    /// Every probe reported that nothing was available.
    #[error("no file provider available (tried: {})", .tried.join(", "))]
    NoProvider {
        /// Locations probed, in order.
        tried: Vec<String>,
    },
}

/// Evaluates `probes` in order and returns the first provider found.
pub fn select_provider<'a, I>(probes: I) -> Result<BoxedProvider<'a>, SelectError>
where
    I: IntoIterator<Item = ProviderProbe<'a>>,
{
    let mut tried = Vec::new();
    for probe in probes {
        let location = probe.location.clone();
        match probe.probe() {
            Ok(provider) => {
                trace_provider!("selected provider {} from {}", provider.name(), location);
                return Ok(provider);
            }
            Err(error) if error.is_not_found() => {
                trace_provider!("{}", error);
                tried.push(location);
            }
            Err(error) => {
                trace_provider!("probe aborted selection: {}", error);
                return Err(SelectError::Probe(error));
            }
        }
    }
    Err(SelectError::NoProvider { tried })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NoIgnore;
    use std::cell::Cell;

    fn missing<'a>(location: &'static str) -> ProviderProbe<'a> {
        ProviderProbe::new(location, move || Err(ProbeError::not_found(location)))
    }

    fn selection_error(result: Result<BoxedProvider<'_>, SelectError>) -> SelectError {
        match result {
            Ok(provider) => panic!("unexpected provider {}", provider.name()),
            Err(error) => error,
        }
    }

    #[test]
    fn first_available_probe_wins() {
        let provider = select_provider(vec![
            missing("a"),
            ProviderProbe::available("b", WalkProvider::new(NoIgnore)),
            ProviderProbe::new("c", || panic!("later probes are not evaluated")),
        ])
        .expect("provider");
        assert_eq!(provider.name(), "walk");
    }

    #[test]
    fn failed_probe_stops_selection() {
        let reached = Cell::new(false);
        let result = select_provider(vec![
            missing("a"),
            ProviderProbe::new("b", || Err(ProbeError::failed("b", "syntax error"))),
            ProviderProbe::new("c", || {
                reached.set(true);
                Ok(Box::new(WalkProvider::new(NoIgnore)) as BoxedProvider<'_>)
            }),
        ]);

        match selection_error(result) {
            SelectError::Probe(error) => {
                assert_eq!(error, ProbeError::failed("b", "syntax error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!reached.get());
    }

    #[test]
    fn exhausting_probes_reports_all_locations() {
        let error = selection_error(select_provider(vec![missing("a"), missing("b")]));
        match &error {
            SelectError::NoProvider { tried } => assert_eq!(tried, &["a", "b"]),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            error.to_string(),
            "no file provider available (tried: a, b)"
        );
    }

    #[test]
    fn empty_probe_list_reports_no_provider() {
        let error = selection_error(select_provider(Vec::new()));
        assert!(matches!(error, SelectError::NoProvider { tried } if tried.is_empty()));
    }

    #[test]
    fn probe_error_messages_name_location() {
        assert_eq!(
            ProbeError::not_found("engine/lib").to_string(),
            "no file provider found at engine/lib"
        );
        assert_eq!(
            ProbeError::failed("engine/lib", "boom").to_string(),
            "failed to load file provider from engine/lib: boom"
        );
    }

    #[test]
    fn enumerating_provider_drops_ignored_records() {
        let provider = EnumeratingProvider::new("records", |root: &Path, extensions: &[String]| {
            assert_eq!(extensions, [".js"]);
            Ok(vec![
                EnumeratedFile::new(root.join("a.js")),
                EnumeratedFile::ignored(root.join("vendor/b.js")),
                EnumeratedFile::new(root.join("c.js")),
            ])
        });

        let files = provider
            .list_files(
                &[PathBuf::from("/one"), PathBuf::from("/two")],
                &[String::from(".js")],
            )
            .expect("list");
        assert_eq!(
            files,
            vec![
                PathBuf::from("/one/a.js"),
                PathBuf::from("/one/c.js"),
                PathBuf::from("/two/a.js"),
                PathBuf::from("/two/c.js"),
            ]
        );
    }

    #[test]
    fn enumerating_provider_propagates_failures() {
        let provider = EnumeratingProvider::new("broken", |_: &Path, _: &[String]| {
            Err(ProviderError::Enumeration("engine crashed".into()))
        });
        let error = provider
            .list_files(&[PathBuf::from("/one")], &[])
            .expect_err("enumeration fails");
        assert_eq!(error.to_string(), "file enumeration failed: engine crashed");
    }

    #[test]
    fn walk_provider_wraps_walk_errors() {
        let provider = WalkProvider::new(NoIgnore);
        let error = provider
            .list_files(&[PathBuf::from("/nonexistent/lintwalk/root")], &[String::from(".js")])
            .expect_err("missing root");
        match error {
            ProviderError::Walk(walk_error) => {
                assert_eq!(walk_error.path(), Path::new("/nonexistent/lintwalk/root"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
