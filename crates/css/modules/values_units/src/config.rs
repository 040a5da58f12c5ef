//! Grammar configuration for value interpretation.
//!
//! Some grammar points are policy rather than CSS: this module collects them so
//! they can be set programmatically or from the environment.

use crate::UnitlessTime;
use std::env;

/// Environment variable read by [`GrammarConfig::from_env`].
pub const UNITLESS_TIME_VAR: &str = "CSS_UNITLESS_TIME";

/// Grammar switches applied while interpreting values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrammarConfig {
    /// Whether unitless numbers are accepted where a `<time>` is expected.
    pub unitless_time: UnitlessTime,
}

impl GrammarConfig {
    /// Construct a new `GrammarConfig` with explicit values.
    #[inline]
    #[must_use]
    pub const fn new(unitless_time: UnitlessTime) -> Self {
        Self { unitless_time }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `CSS_UNITLESS_TIME` (`reject`, `zero` or `seconds`). Missing or
    /// unrecognized values fall back to the default (`zero`).
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let unitless_time = lookup(UNITLESS_TIME_VAR)
            .and_then(|raw| UnitlessTime::from_name(&raw))
            .unwrap_or_default();
        Self { unitless_time }
    }
}
