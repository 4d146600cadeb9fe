use super::*;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use test_support::{SourceTree, paths};
use walk::WalkErrorKind;

/// Oracle that ignores configured absolute paths and records every query.
#[derive(Default)]
struct RecordingOracle {
    ignored_dirs: BTreeSet<PathBuf>,
    ignored_files: BTreeSet<PathBuf>,
    dir_queries: RefCell<Vec<PathBuf>>,
    file_queries: RefCell<Vec<PathBuf>>,
}

impl RecordingOracle {
    fn ignoring_dir(mut self, path: PathBuf) -> Self {
        self.ignored_dirs.insert(path);
        self
    }

    fn ignoring_file(mut self, path: PathBuf) -> Self {
        self.ignored_files.insert(path);
        self
    }
}

impl IgnoreOracle for RecordingOracle {
    fn is_directory_ignored(&self, path: &Path) -> bool {
        self.dir_queries.borrow_mut().push(path.to_path_buf());
        self.ignored_dirs.contains(path)
    }

    fn is_file_ignored(&self, path: &Path) -> bool {
        self.file_queries.borrow_mut().push(path.to_path_buf());
        self.ignored_files.contains(path)
    }
}

fn sorted(extensions: &[&str]) -> ListOptions {
    ListOptions::new(extensions.iter().copied()).sort_entries(true)
}

#[test]
fn lists_matching_files_in_traversal_order() {
    let tree = SourceTree::with_paths(&["a.js", "b.txt", "sub/c.js"]);
    let files = list_files_with([tree.path()], &sorted(&[".js"]), &NoIgnore).expect("list");
    assert_eq!(files, paths(&["a.js", "sub/c.js"]));
}

#[test]
fn ignored_directory_hides_its_files() {
    let tree = SourceTree::with_paths(&["a.js", "b.txt", "sub/c.js"]);
    let oracle = RecordingOracle::default().ignoring_dir(tree.join("sub"));
    let files = list_files_with([tree.path()], &sorted(&[".js"]), &oracle).expect("list");
    assert_eq!(files, paths(&["a.js"]));
    assert!(
        oracle
            .file_queries
            .borrow()
            .iter()
            .all(|path| !path.starts_with(tree.join("sub")))
    );
}

#[test]
fn ignored_file_is_dropped() {
    let tree = SourceTree::with_paths(&["a.js", "sub/c.js"]);
    let oracle = RecordingOracle::default().ignoring_file(tree.join("sub/c.js"));
    let files = list_files_with([tree.path()], &sorted(&[".js"]), &oracle).expect("list");
    assert_eq!(files, paths(&["a.js"]));
}

#[test]
fn oracle_receives_absolute_paths_for_every_node() {
    let tree = SourceTree::with_paths(&["a.js", "b.txt", "sub/c.js"]);
    let oracle = RecordingOracle::default();
    list_files_with([tree.path()], &sorted(&[".js"]), &oracle).expect("list");

    assert_eq!(*oracle.dir_queries.borrow(), vec![tree.join("sub")]);
    // The ignore check runs before the extension check, so b.txt is queried too.
    assert_eq!(
        *oracle.file_queries.borrow(),
        vec![tree.join("a.js"), tree.join("b.txt"), tree.join("sub/c.js")]
    );
}

#[test]
fn directories_never_appear_in_output() {
    let tree = SourceTree::with_paths(&["lib.js/", "lib.js/index.js", "empty.js/"]);
    let files = list_files_with([tree.path()], &sorted(&[".js"]), &NoIgnore).expect("list");
    assert_eq!(files, paths(&["lib.js/index.js"]));
}

#[test]
fn extension_match_is_suffix_exact() {
    let tree = SourceTree::with_paths(&["foo.jsx", "bar.js", "baz.mjs", "qux.min.js"]);

    let jsx = list_files_with([tree.path()], &sorted(&[".jsx"]), &NoIgnore).expect("list");
    assert_eq!(jsx, paths(&["foo.jsx"]));

    let js = list_files_with([tree.path()], &sorted(&[".js"]), &NoIgnore).expect("list");
    assert_eq!(js, paths(&["bar.js", "qux.min.js"]));
}

#[test]
fn multiple_roots_are_concatenated_in_order() {
    let first = SourceTree::with_paths(&["x.ts", "nested/y.ts"]);
    let second = SourceTree::with_paths(&["z.ts"]);
    let files = list_files_with(
        [second.path(), first.path()],
        &sorted(&[".ts"]),
        &NoIgnore,
    )
    .expect("list");
    assert_eq!(files, paths(&["z.ts", "nested/y.ts", "x.ts"]));
}

#[test]
fn overlapping_roots_are_not_deduplicated() {
    let tree = SourceTree::with_paths(&["pkg/index.js"]);
    let files = list_files_with(
        [tree.path().to_path_buf(), tree.join("pkg")],
        &sorted(&[".js"]),
        &NoIgnore,
    )
    .expect("list");
    assert_eq!(files, paths(&["pkg/index.js", "index.js"]));
}

#[test]
fn unsorted_listing_contains_same_files() {
    let tree = SourceTree::with_paths(&["a.js", "b.js", "c/d.js", "c/e.js", "f.md"]);
    let unsorted: BTreeSet<_> = list_files([tree.path()], &[".js"], &NoIgnore)
        .expect("list")
        .into_iter()
        .collect();
    let expected: BTreeSet<_> = paths(&["a.js", "b.js", "c/d.js", "c/e.js"])
        .into_iter()
        .collect();
    assert_eq!(unsorted, expected);
}

#[test]
fn empty_roots_yield_empty_listing() {
    let files = list_files(Vec::<PathBuf>::new(), &[".js"], &NoIgnore).expect("list");
    assert!(files.is_empty());
}

#[test]
fn missing_root_aborts_listing() {
    let tree = SourceTree::with_paths(&["a.js"]);
    let missing = tree.join("missing");
    let error = list_files([tree.path().to_path_buf(), missing.clone()], &[".js"], &NoIgnore)
        .expect_err("second root is missing");
    assert!(matches!(error.kind(), WalkErrorKind::ReadDir { .. }));
    assert_eq!(error.path(), missing);
}

#[test]
fn empty_extension_lists_every_file() {
    let tree = SourceTree::with_paths(&["a.js", "b.txt", "sub/"]);
    let files = list_files_with([tree.path()], &sorted(&[""]), &NoIgnore).expect("list");
    assert_eq!(files, paths(&["a.js", "b.txt"]));

    let none = list_files_with([tree.path()], &sorted(&[]), &NoIgnore).expect("list");
    assert!(none.is_empty());
}

#[test]
fn panicking_oracle_unwinds_through_listing() {
    let tree = SourceTree::with_paths(&["a.js", "b.js", "c.js"]);
    let queries = Cell::new(0_usize);
    let oracle = FnOracle::new(
        |_: &Path| false,
        |file: &Path| {
            queries.set(queries.get() + 1);
            if queries.get() == 2 {
                panic!("oracle failed on {}", file.display());
            }
            false
        },
    );

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        list_files_with([tree.path()], &sorted(&[".js"]), &oracle)
    }));

    let payload = outcome.expect_err("panic escapes the listing");
    let message = payload
        .downcast_ref::<String>()
        .expect("formatted panic message");
    assert!(message.contains("b.js"), "unexpected payload: {message}");
    assert_eq!(queries.get(), 2);
}

#[test]
fn boxed_trait_object_oracle_is_accepted() {
    let tree = SourceTree::with_paths(&["keep.js", "skip/drop.js"]);
    let skip = tree.join("skip");
    let oracle: Box<dyn IgnoreOracle> =
        Box::new(FnOracle::new(move |dir: &Path| dir == skip, |_: &Path| false));
    let files = list_files([tree.path()], &[".js"], &oracle).expect("list");
    assert_eq!(files, paths(&["keep.js"]));
}

#[test]
fn list_options_accumulate_extensions() {
    let options = ListOptions::new([".js"]).with_extension(".ts");
    assert_eq!(options.extensions(), [".js", ".ts"]);
    assert!(!options.sorts_entries());
    assert_eq!(ListOptions::default().extensions().len(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn list_options_deserialise_from_json() {
    let options: ListOptions =
        serde_json::from_str(r#"{ "extensions": [".js", ".cjs"] }"#).expect("parse options");
    assert_eq!(options, ListOptions::new([".js", ".cjs"]));
}
