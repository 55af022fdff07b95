//! Cache store for geocoding results.
//!
//! Provides a [`GeoCache`] trait with two implementations:
//! - [`RedisGeoCache`] - Production Redis-backed store
//! - [`InMemoryGeoCache`] - Process-local store for development and tests

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::{Clock, InMemoryGeoCache, ManualClock, SystemClock};
pub use redis_cache::{REDIS_BACKEND, RedisGeoCache};
pub use service::{CacheError, CacheResult, GeoCache};
