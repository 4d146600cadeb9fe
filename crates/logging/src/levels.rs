//! crates/logging/src/levels.rs
//! Debug flags identifying the lintwalk diagnostic categories.

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Directory reads and pruning.
    Walk,
    /// Ignore-oracle and extension decisions.
    Filter,
    /// Provider probing and selection.
    Provider,
}

impl DebugFlag {
    /// Every flag, in the order directives are rendered.
    pub const ALL: [Self; 3] = [Self::Walk, Self::Filter, Self::Provider];

    /// Returns the short flag name accepted by [`crate::VerbosityConfig::apply_debug_flag`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Filter => "filter",
            Self::Provider => "provider",
        }
    }

    /// Returns the tracing target used by the matching `trace_*!` macro.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Walk => "lintwalk::walk",
            Self::Filter => "lintwalk::filter",
            Self::Provider => "lintwalk::provider",
        }
    }

    /// Looks up a flag by its short name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }

    /// Maps a tracing target back to its flag.
    ///
    /// Matches the full target or any target nested beneath it, so
    /// `lintwalk::walk::dir` maps to [`DebugFlag::Walk`] while `lintwalk::walker`
    /// does not.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| {
            target
                .strip_prefix(flag.target())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        })
    }
}
