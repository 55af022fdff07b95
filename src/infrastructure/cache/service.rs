//! Cache store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Shared key-value store holding serialized geocoding results.
///
/// Entries carry an absolute expiration set at write time. Reading an entry never
/// extends its lifetime, and the store removes expired entries on its own; callers
/// never delete keys.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisGeoCache`] - Redis-backed store shared across instances
/// - [`crate::infrastructure::cache::InMemoryGeoCache`] - Process-local store for development and tests
#[async_trait]
pub trait GeoCache: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent or expired.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend could not be queried.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, expiring `ttl_seconds` from now.
    ///
    /// Overwrites any previous value (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend rejected the write.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
