#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the depth-first directory traversal used by `lintwalk` to
//! enumerate candidate source files. The walker visits every regular file and
//! directory reachable from a root, consulting two caller-supplied predicates
//! along the way: a *deep filter* that decides whether a directory is entered
//! and an *entry filter* that decides whether a file is kept.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the traversal root, both filters and whether
//!   directory children are sorted before processing.
//! - [`walk`] runs an unfiltered traversal and is the shortest path to a full
//!   listing.
//! - [`WalkEntry`] records the name, relative path, absolute path, depth and
//!   [`EntryKind`] of every node that survives filtering.
//! - [`WalkError`] describes I/O failures encountered while reading
//!   directories. Errors capture the offending path so higher layers can
//!   surface actionable diagnostics.
//!
//! Traversal keeps an explicit stack of open directory frames instead of
//! recursing, and the full result is collected before it is returned.
//!
//! # Invariants
//!
//! - Entries are produced in pre-order: a directory appears before anything
//!   beneath it, and its subtree is finished before the next sibling.
//! - A directory rejected by the deep filter contributes nothing, neither
//!   itself nor any descendant.
//! - A file rejected by the entry filter is the only entry affected.
//! - Symbolic links, sockets, FIFOs and device nodes never produce entries and
//!   are never followed.
//! - Without sorting, children are processed in the order the directory read
//!   reports them.
//!
//! # Errors
//!
//! Any failure to read a directory, iterate its entries or query an entry's
//! file type aborts the traversal with [`WalkError`]. Partial results are
//! discarded.
//!
//! # Examples
//!
//! Walk a temporary tree while skipping a `vendor` directory and keeping only
//! `.js` files:
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir_all(root.join("src"))?;
//! fs::create_dir_all(root.join("vendor"))?;
//! fs::write(root.join("src/main.js"), b"")?;
//! fs::write(root.join("src/notes.md"), b"")?;
//! fs::write(root.join("vendor/lib.js"), b"")?;
//!
//! let entries = WalkBuilder::new(root)
//!     .deep_filter(|entry| entry.name() != "vendor")
//!     .entry_filter(|entry| entry.relative_path().extension().is_some_and(|ext| ext == "js"))
//!     .sort_entries(true)
//!     .walk()?;
//!
//! let paths: Vec<PathBuf> = entries
//!     .iter()
//!     .map(|entry| entry.relative_path().to_path_buf())
//!     .collect();
//! assert_eq!(paths, vec![PathBuf::from("src"), PathBuf::from("src/main.js")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - `flist` builds the ignore-aware file listing on top of this walker.

mod builder;
mod entry;
mod error;
mod walker;


pub use crate::builder::WalkBuilder;
pub use crate::entry::{EntryKind, WalkEntry};
pub use crate::error::{WalkError, WalkErrorKind};

use std::path::PathBuf;

/// Walks `root` without filters, returning every file and directory beneath it.
///
/// Equivalent to `WalkBuilder::new(root).walk()`.
pub fn walk<P: Into<PathBuf>>(root: P) -> Result<Vec<WalkEntry>, WalkError> {
    WalkBuilder::new(root).walk()
}
