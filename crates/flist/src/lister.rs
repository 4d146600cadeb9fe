use crate::extension::matches_extension;
use crate::options::ListOptions;
use crate::oracle::IgnoreOracle;
use logging::{trace_filter, trace_walk};
use std::path::{Path, PathBuf};
use walk::{WalkBuilder, WalkEntry, WalkError};

/// Lists files under every root whose relative path ends with one of
/// `extensions` and that `oracle` does not ignore.
///
/// Children are visited in the order the directory reads report them; use
/// [`list_files_with`] to sort them instead.
pub fn list_files<I, P, S, O>(
    source_roots: I,
    extensions: &[S],
    oracle: &O,
) -> Result<Vec<PathBuf>, WalkError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    S: AsRef<str>,
    O: IgnoreOracle + ?Sized,
{
    let mut files = Vec::new();
    for root in source_roots {
        list_root(root.as_ref(), extensions, false, oracle, &mut files)?;
    }
    Ok(files)
}

/// Lists files under every root according to `options`.
pub fn list_files_with<I, P, O>(
    source_roots: I,
    options: &ListOptions,
    oracle: &O,
) -> Result<Vec<PathBuf>, WalkError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    O: IgnoreOracle + ?Sized,
{
    let mut files = Vec::new();
    for root in source_roots {
        list_root(
            root.as_ref(),
            options.extensions(),
            options.sorts_entries(),
            oracle,
            &mut files,
        )?;
    }
    Ok(files)
}

fn list_root<S, O>(
    root: &Path,
    extensions: &[S],
    sort_entries: bool,
    oracle: &O,
    files: &mut Vec<PathBuf>,
) -> Result<(), WalkError>
where
    S: AsRef<str>,
    O: IgnoreOracle + ?Sized,
{
    let entries = WalkBuilder::new(root)
        .deep_filter(|entry| {
            let ignored = oracle.is_directory_ignored(entry.full_path());
            if ignored {
                trace_filter!("ignored directory {:?}", entry.full_path());
            }
            !ignored
        })
        .entry_filter(|entry| {
            if oracle.is_file_ignored(entry.full_path()) {
                trace_filter!("ignored file {:?}", entry.full_path());
                return false;
            }
            matches_extension(entry.relative_path(), extensions)
        })
        .sort_entries(sort_entries)
        .walk()?;

    let before = files.len();
    files.extend(
        entries
            .into_iter()
            .filter(|entry| !entry.is_dir())
            .map(WalkEntry::into_relative_path),
    );
    trace_walk!("listed {} files under {:?}", files.len() - before, root);
    Ok(())
}
