#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralises the diagnostics plumbing shared by the lintwalk
//! crates. Every crate logs through [`tracing`] using one of a small set of
//! targets, each identified by a [`DebugFlag`]. A [`VerbosityConfig`] assigns a
//! level to every flag and renders the corresponding `EnvFilter` directives,
//! and [`init_tracing`] installs a stderr subscriber honouring them.
//!
//! # Design
//!
//! - [`trace_walk!`], [`trace_filter!`] and [`trace_provider!`] wrap the
//!   standard tracing macros with the matching target so call sites never
//!   spell target strings by hand. The macros expand through this crate's
//!   re-export of `tracing`, so callers need no direct dependency on it.
//! - [`DebugFlag`] maps between flag names (`walk`), tracing targets
//!   (`lintwalk::walk`) and back.
//! - [`VerbosityConfig`] mirrors the familiar `-v` ladder: level 0 only shows
//!   warnings and each additional level raises the flags toward full tracing.
//!
//! # Examples
//!
//! ```
//! use logging::{DebugFlag, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flag("walk3").unwrap();
//!
//! assert_eq!(config.level(DebugFlag::Walk), 3);
//! assert!(config.directives().contains("lintwalk::walk=trace"));
//! ```

mod config;
mod levels;
mod subscriber;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::DebugFlag;
pub use subscriber::{env_filter, init_tracing};

#[doc(hidden)]
pub use tracing;
