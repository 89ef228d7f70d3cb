//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Requested capacity is outside the supported range
    #[error("invalid cache capacity: {0}")]
    InvalidCapacity(usize),

    /// Requested TTL is not strictly positive
    #[error("invalid expiry")]
    InvalidExpiry,

    /// Key not present in the cache
    #[error("cache not found")]
    NotFound,

    /// Key present but past its TTL
    #[error("cache expired")]
    Expired,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
