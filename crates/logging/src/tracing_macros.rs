//! crates/logging/src/tracing_macros.rs
//! Convenience macros for lintwalk-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with appropriate targets for lintwalk subsystems.

/// Emit a directory traversal trace.
///
/// # Example
/// ```
/// logging::trace_walk!("read {} entries from {:?}", 3, "src");
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "lintwalk::walk", $($arg)*);
    };
}

/// Emit a per-entry filter decision trace.
///
/// Filter decisions are made once per visited node, so they are logged at
/// trace level.
///
/// # Example
/// ```
/// logging::trace_filter!("ignored {:?}", "node_modules");
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "lintwalk::filter", $($arg)*);
    };
}

/// Emit a provider selection trace.
///
/// # Example
/// ```
/// logging::trace_provider!("selected provider {}", "walk");
/// ```
#[macro_export]
macro_rules! trace_provider {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "lintwalk::provider", $($arg)*);
    };
}
