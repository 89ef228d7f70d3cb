//! Hotset - a bounded in-memory key-value cache
//!
//! Keeps the `capacity` most recently used entries, each with one fixed
//! time-to-live. Lookups past the TTL evict lazily; there is no background
//! sweeper, no persistence, and no network surface.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::Cache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
