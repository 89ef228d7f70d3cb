//! Shared Cache Handle
//!
//! Thread-safe front door to the cache store.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Concurrency-safe cache handle.
///
/// Clones share one underlying store, so a handle can be handed to any
/// number of threads. Every operation runs under a single exclusive lock
/// held for the full call; `get` takes it too, since a read promotes the
/// entry in the recency order. The lock guards pure in-memory bookkeeping,
/// so hold times stay short.
pub struct Cache<K, V> {
    /// Store shared between all clones of this handle
    store: Arc<Mutex<CacheStore<K, V>>>,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K, V> std::fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new, empty cache with the given capacity and TTL.
    ///
    /// # Errors
    /// - `InvalidCapacity` when `capacity` is outside `[2, 100]`
    /// - `InvalidExpiry` when `ttl` is zero
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Ok(Self {
            store: Arc::new(Mutex::new(CacheStore::new(capacity, ttl)?)),
        })
    }

    /// Creates a new cache from configuration.
    ///
    /// Configuration values pass through the same validation as `new`.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity, config.ttl)
    }

    // == Put ==
    /// Stores a key-value pair, overwriting and re-timing any existing
    /// entry for the key. Evicts the least recently used entry when a new
    /// key arrives at full capacity.
    pub fn put(&self, key: K, value: V) {
        self.store.lock().put(key, value);
    }

    // == Get ==
    /// Retrieves the value stored under `key`, promoting it to most
    /// recently used.
    ///
    /// # Errors
    /// - `NotFound` when the key was never inserted or already evicted
    /// - `Expired` when the key was found past its TTL (the entry is
    ///   removed as a side effect)
    pub fn get(&self, key: &K) -> Result<V> {
        self.store.lock().get(key)
    }

    // == Introspection ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// The fixed capacity this cache was constructed with.
    pub fn capacity(&self) -> usize {
        self.store.lock().capacity()
    }

    /// The fixed TTL this cache was constructed with.
    pub fn ttl(&self) -> Duration {
        self.store.lock().ttl()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::thread;

    #[test]
    fn test_cache_put_and_get() {
        let cache = Cache::new(10, Duration::from_secs(60)).unwrap();

        cache.put("key1", "value1");
        assert_eq!(cache.get(&"key1").unwrap(), "value1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let cache: Cache<&str, &str> = Cache::new(10, Duration::from_secs(60)).unwrap();

        assert_eq!(cache.get(&"nonexistent").unwrap_err(), CacheError::NotFound);
    }

    #[test]
    fn test_cache_invalid_construction() {
        assert_eq!(
            Cache::<&str, &str>::new(1, Duration::from_secs(60)).unwrap_err(),
            CacheError::InvalidCapacity(1)
        );
        assert_eq!(
            Cache::<&str, &str>::new(10, Duration::ZERO).unwrap_err(),
            CacheError::InvalidExpiry
        );
    }

    #[test]
    fn test_cache_from_config() {
        let config = CacheConfig {
            capacity: 10,
            ttl: Duration::from_secs(60),
        };
        let cache: Cache<&str, &str> = Cache::from_config(&config).unwrap();

        assert_eq!(cache.capacity(), 10);
        assert_eq!(cache.ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_cache_default_config_is_valid() {
        let cache: Cache<&str, &str> = Cache::from_config(&CacheConfig::default()).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_one_store() {
        let cache = Cache::new(10, Duration::from_secs(60)).unwrap();
        let other = cache.clone();

        cache.put("key1", "value1");
        assert_eq!(other.get(&"key1").unwrap(), "value1");
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_concurrent_writers_stay_bounded() {
        let cache: Cache<String, usize> = Cache::new(8, Duration::from_secs(60)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        cache.put(format!("t{t}_k{i}"), i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 8);
        assert!(!cache.is_empty());
    }
}
