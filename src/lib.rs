#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lintwalk` enumerates the source files a lint run should check. It bundles
//! the workspace crates behind one dependency:
//!
//! - The `walk` crate performs the filtered depth-first directory traversal
//!   through [`walk()`] and [`WalkBuilder`].
//! - [`flist`] turns an ignore oracle and an extension list into walker
//!   filters and returns relative file paths. Its [`provider`] module picks one
//!   listing implementation from an ordered list of availability checks.
//! - [`logging`] owns the tracing targets and subscriber setup.
//!
//! # Examples
//!
//! ```
//! use lintwalk::{ListOptions, NoIgnore, VerbosityConfig, list_files_with};
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir(temp.path().join("sub"))?;
//! fs::write(temp.path().join("a.js"), b"")?;
//! fs::write(temp.path().join("b.txt"), b"")?;
//! fs::write(temp.path().join("sub/c.js"), b"")?;
//!
//! let _ = lintwalk::init_tracing(&VerbosityConfig::default());
//!
//! let options = ListOptions::new([".js"]).sort_entries(true);
//! let files = list_files_with([temp.path()], &options, &NoIgnore)?;
//! assert_eq!(files, vec![PathBuf::from("a.js"), PathBuf::from("sub/c.js")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub use flist::provider;
pub use flist::{
    FnOracle, IgnoreOracle, ListOptions, NoIgnore, list_files, list_files_with,
    matches_extension,
};
pub use logging::{DebugFlag, VerbosityConfig, init_tracing};
pub use walk::{EntryKind, WalkBuilder, WalkEntry, WalkError, WalkErrorKind, walk};

pub use flist;
pub use logging;
