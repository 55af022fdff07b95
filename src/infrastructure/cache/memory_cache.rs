//! Process-local cache implementation with expiry.

use super::service::{CacheError, CacheResult, GeoCache};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Source of the current time for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory store used when Redis is not configured, and in tests.
///
/// Not shared between processes. Expired entries are treated as absent and
/// pruned when read.
pub struct InMemoryGeoCache {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryGeoCache {
    /// Creates an empty cache driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        debug!("Using in-memory geocode cache");
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Number of stored entries, including ones that expired but were not read yet.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> CacheResult<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| CacheError::OperationError("cache lock poisoned".to_string()))
    }
}

impl Default for InMemoryGeoCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoCache for InMemoryGeoCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = self.clock.now();
        let mut entries = self.lock()?;

        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| CacheError::OperationError(format!("TTL out of range: {}", ttl_seconds)))?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or_else(|| CacheError::OperationError(format!("TTL out of range: {}", ttl_seconds)))?;

        self.lock()?.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.entries.lock().is_ok()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn manual_cache() -> (Arc<ManualClock>, InMemoryGeoCache) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ));
        let cache = InMemoryGeoCache::with_clock(clock.clone());
        (clock, cache)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (_, cache) = manual_cache();
        assert_eq!(cache.get("geo:nowhere").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let (_, cache) = manual_cache();
        cache.set("geo:a", "value", 60).await.unwrap();
        assert_eq!(cache.get("geo:a").await.unwrap().as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_entry_expires_at_ttl() {
        let (clock, cache) = manual_cache();
        cache.set("geo:a", "value", 60).await.unwrap();

        clock.advance(Duration::seconds(59));
        assert!(cache.get("geo:a").await.unwrap().is_some());

        clock.advance(Duration::seconds(1));
        assert!(cache.get("geo:a").await.unwrap().is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_read_does_not_extend_lifetime() {
        let (clock, cache) = manual_cache();
        cache.set("geo:a", "value", 100).await.unwrap();

        clock.advance(Duration::seconds(90));
        assert!(cache.get("geo:a").await.unwrap().is_some());

        clock.advance(Duration::seconds(20));
        assert!(cache.get("geo:a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_resets_expiry() {
        let (clock, cache) = manual_cache();
        cache.set("geo:a", "old", 100).await.unwrap();
        clock.advance(Duration::seconds(90));
        cache.set("geo:a", "new", 100).await.unwrap();
        clock.advance(Duration::seconds(50));

        assert_eq!(cache.get("geo:a").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_oversized_ttl_is_an_error() {
        let (_, cache) = manual_cache();

        let result = cache.set("geo:a", "value", 9_000_000_000_000).await;

        assert!(matches!(result, Err(CacheError::OperationError(_))));
        assert!(cache.is_empty());
    }
}
