//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached value with its absolute expiration timestamp.
///
/// The key is not stored here; it lives in the recency-order node so that
/// eviction can find it from a position handle alone.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms() + ttl.as_millis() as u64,
        }
    }

    // == Refresh ==
    /// Replaces the value and restarts the TTL clock.
    ///
    /// Only writes refresh the expiration; reads never extend it.
    pub fn refresh(&mut self, value: V, ttl: Duration) {
        self.value = value;
        self.expires_at = current_timestamp_ms() + ttl.as_millis() as u64;
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired only once the current time is strictly past
    /// `expires_at`; a lookup landing exactly on the expiration instant
    /// still counts as live.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
