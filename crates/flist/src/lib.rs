#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `flist` builds the list of source files a lint run operates on. It drives
//! the [`walk`] crate once per source root, asks a caller-supplied
//! [`IgnoreOracle`] whether each directory and file is excluded by policy, and
//! keeps only files whose relative path ends with one of the configured
//! extensions.
//!
//! # Design
//!
//! - [`list_files`] and [`list_files_with`] translate the oracle into the
//!   walker's deep and entry filters, then flatten the walk results into
//!   relative file paths. Directories are only used to steer recursion and
//!   never appear in the output.
//! - [`IgnoreOracle`] is the seam to the host linting engine. [`NoIgnore`] and
//!   [`FnOracle`] cover the common cases of ignoring nothing or adapting two
//!   closures.
//! - [`ListOptions`] bundles the extension list with traversal settings.
//! - [`provider`] selects one file-listing implementation from an ordered list
//!   of availability checks, adapting enumeration-style providers to the same
//!   flat path contract.
//!
//! # Invariants
//!
//! - Roots are processed in order and their results concatenated; a file
//!   reachable from two roots is listed once per root.
//! - Per root, files keep the walker's pre-order.
//! - The oracle always receives absolute paths (the root resolved against the
//!   current directory, joined with the entry's relative path).
//! - Extension matching is an exact suffix comparison on the relative path.
//!
//! # Errors
//!
//! Listing fails with [`walk::WalkError`] as soon as any directory cannot be
//! read. Nothing is retried and no partial list is returned.
//!
//! # Examples
//!
//! ```
//! use flist::{FnOracle, list_files};
//! use std::fs;
//! use std::path::{Path, PathBuf};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir(root.join("sub"))?;
//! fs::write(root.join("a.js"), b"")?;
//! fs::write(root.join("b.txt"), b"")?;
//! fs::write(root.join("sub/c.js"), b"")?;
//!
//! let ignored = root.join("sub");
//! let oracle = FnOracle::new(|dir: &Path| dir == ignored, |_: &Path| false);
//!
//! let files = list_files(&[root], &[".js"], &oracle)?;
//! assert_eq!(files, vec![PathBuf::from("a.js")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod extension;
mod lister;
mod options;
mod oracle;
pub mod provider;

#[cfg(test)]
mod tests;

pub use crate::extension::matches_extension;
pub use crate::lister::{list_files, list_files_with};
pub use crate::options::ListOptions;
pub use crate::oracle::{FnOracle, IgnoreOracle, NoIgnore};
