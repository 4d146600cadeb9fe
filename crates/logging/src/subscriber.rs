//! crates/logging/src/subscriber.rs
//! Subscriber installation driven by [`VerbosityConfig`].

use super::config::VerbosityConfig;
use std::env;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Builds the filter for `config`.
///
/// A non-empty `RUST_LOG` that parses takes precedence over the configuration
/// so ad-hoc debugging never requires a rebuild. An unset, empty or invalid
/// `RUST_LOG` falls back to [`VerbosityConfig::directives`].
#[must_use]
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    filter_from(env::var("RUST_LOG").ok().as_deref(), config)
}

fn filter_from(rust_log: Option<&str>, config: &VerbosityConfig) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.directives()))
}

/// Installs a global stderr subscriber honouring `config`.
///
/// Fails when a global subscriber has already been installed.
///
/// # Example
///
/// ```rust,no_run
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(&VerbosityConfig::from_verbose_level(2)).expect("first subscriber");
/// logging::trace_walk!("walking {}", "src");
/// ```
pub fn init_tracing(config: &VerbosityConfig) -> Result<(), TryInitError> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(layer)
        .try_init()
}
