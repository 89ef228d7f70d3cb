//! Configuration Module
//!
//! Handles cache sizing parameters, optionally loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::MAX_CAPACITY;

/// Cache construction parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Validation happens when the cache is built, not here, so an
/// out-of-range environment value surfaces as a construction error.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of live entries the cache can hold
    pub capacity: usize,
    /// Fixed TTL applied to every entry
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL_SECS` - TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.ttl),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CAPACITY,
            ttl: Duration::from_secs(300),
        }
    }
}
