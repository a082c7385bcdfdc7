//! Configuration for keyed handler caches.
//!
//! Caches never evict; the only knob is when to warn that one has grown
//! large. Configuration can be loaded from the environment or constructed
//! programmatically.

use core::num::NonZeroUsize;
use std::env;

/// Environment variable read by [`CacheConfig::from_env`].
pub const CACHE_WARN_KEYS_VAR: &str = "CALLABLE_CACHE_WARN_KEYS";

/// Runtime configuration for [`crate::HandlerCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Log a warning once when a cache holds this many distinct keys
    pub warn_threshold: Option<NonZeroUsize>,
}

impl CacheConfig {
    /// Construct a config with an explicit warning threshold. `0` disables the warning.
    #[inline]
    #[must_use]
    pub const fn new(warn_threshold: usize) -> Self {
        Self {
            warn_threshold: NonZeroUsize::new(warn_threshold),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `CALLABLE_CACHE_WARN_KEYS`: a positive key count. Unset, `0`
    /// or unparsable values leave the warning disabled.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(env::var(CACHE_WARN_KEYS_VAR).ok().as_deref())
    }

    /// Parse the raw value of the environment variable.
    fn from_value(raw: Option<&str>) -> Self {
        let warn_threshold = raw
            .and_then(|val| val.trim().parse::<usize>().ok())
            .and_then(NonZeroUsize::new);
        Self { warn_threshold }
    }
}
