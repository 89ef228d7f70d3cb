//! Cache Store Module
//!
//! Main cache engine combining a key index with the recency list and TTL
//! expiration. Single-threaded; `Cache` wraps it behind a lock for
//! concurrent callers.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, LruList, MAX_CAPACITY, MIN_CAPACITY};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value store with LRU eviction and one fixed TTL.
///
/// `index` maps each key to the handle of its node in `order`; the node
/// holds the key, the value, and the expiration timestamp. The two
/// structures always agree: every indexed key resolves to exactly one live
/// node, and every live node is indexed under exactly one key.
pub struct CacheStore<K, V> {
    /// Key to position-handle mapping
    index: HashMap<K, usize>,
    /// Entries in recency order, most recently used at the front
    order: LruList<K, CacheEntry<V>>,
    /// Maximum number of live entries, fixed at construction
    capacity: usize,
    /// TTL applied to every entry, fixed at construction
    ttl: Duration,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and TTL.
    ///
    /// # Errors
    /// - `InvalidCapacity` when `capacity` is outside `[2, 100]`
    /// - `InvalidExpiry` when `ttl` is zero
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        if ttl.is_zero() {
            return Err(CacheError::InvalidExpiry);
        }
        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: LruList::with_capacity(capacity),
            capacity,
            ttl,
        })
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing key is overwritten in place: new value, fresh TTL, moved
    /// to the front of the recency order. Overwrites never evict. A new key
    /// arriving at full capacity first evicts the least recently used entry,
    /// so at most one entry is ever displaced per call.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.order.payload_mut(idx) {
                entry.refresh(value, self.ttl);
            }
            self.order.move_to_front(idx);
            return;
        }

        if self.index.len() >= self.capacity {
            if let Some(oldest) = self.order.back() {
                debug!(len = self.index.len(), "evicting least recently used entry");
                self.evict(oldest);
            }
        }

        let entry = CacheEntry::new(value, self.ttl);
        let idx = self.order.push_front(key.clone(), entry);
        self.index.insert(key, idx);
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// A hit moves the entry to the front of the recency order without
    /// touching its TTL. A key found past its TTL is evicted on the spot
    /// and reported as `Expired`; the stale value is never returned.
    ///
    /// # Errors
    /// - `NotFound` when the key was never inserted or already evicted
    /// - `Expired` when the key was found past its TTL
    pub fn get(&mut self, key: &K) -> Result<V> {
        let Some(&idx) = self.index.get(key) else {
            return Err(CacheError::NotFound);
        };

        if self.order.payload(idx).is_some_and(CacheEntry::is_expired) {
            debug!("evicting expired entry on lookup");
            self.evict(idx);
            return Err(CacheError::Expired);
        }

        self.order.move_to_front(idx);
        self.order
            .payload(idx)
            .map(|entry| entry.value.clone())
            .ok_or(CacheError::NotFound)
    }

    // == Evict ==
    /// Removal primitive shared by capacity and expiry eviction: drops the
    /// node behind `idx` from both the recency order and the key index.
    fn evict(&mut self, idx: usize) {
        if let Some((key, _)) = self.order.remove(idx) {
            self.index.remove(&key);
        }
    }

    // == Length ==
    /// Returns the current number of live entries.
    ///
    /// Entries past their TTL but not yet looked up still count; they are
    /// only removed on access.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Parameters ==
    /// The fixed capacity this store was constructed with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The fixed TTL this store was constructed with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<K, V> fmt::Debug for CacheStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .field("len", &self.index.len())
            .finish()
    }
}
