//! crates/logging/src/config.rs
//! Verbosity configuration mapping debug flags to tracing levels.

use super::levels::DebugFlag;

/// Per-flag verbosity levels.
///
/// Level `0` silences a flag, `1` shows info events, `2` debug events and `3`
/// or more trace events. Warnings and errors are always shown.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Directory traversal level.
    pub walk: u8,
    /// Filter decision level.
    pub filter: u8,
    /// Provider selection level.
    pub provider: u8,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (`-v` count).
    pub fn from_verbose_level(level: u8) -> Self {
        match level {
            0 => Self::default(),
            1 => Self {
                walk: 1,
                filter: 0,
                provider: 1,
            },
            2 => Self {
                walk: 2,
                filter: 1,
                provider: 2,
            },
            _ => Self {
                walk: 3,
                filter: 3,
                provider: 3,
            },
        }
    }

    /// Returns the level configured for `flag`.
    #[must_use]
    pub const fn level(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Walk => self.walk,
            DebugFlag::Filter => self.filter,
            DebugFlag::Provider => self.provider,
        }
    }

    /// Sets the level for `flag`.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Walk => self.walk = level,
            DebugFlag::Filter => self.filter = level,
            DebugFlag::Provider => self.provider = level,
        }
    }

    /// Apply a single debug flag token (e.g., "walk2", "filter").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.set(flag, level);
        Ok(())
    }

    /// Renders `EnvFilter` directives for this configuration.
    ///
    /// The global default is `warn`; each flag with a non-zero level adds a
    /// directive for its target.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = String::from("warn");
        for flag in DebugFlag::ALL {
            let level = match self.level(flag) {
                0 => continue,
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            directives.push(',');
            directives.push_str(flag.target());
            directives.push('=');
            directives.push_str(level);
        }
        directives
    }
}

/// Parse a flag token like "walk2" into ("walk", 2) or "filter" into ("filter", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let (name, level_str) = token.split_at(pos);
            let level = level_str
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
