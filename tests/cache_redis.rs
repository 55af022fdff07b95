//! Runs against a live Redis:
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379/15 cargo test --test cache_redis -- --ignored
//! ```

mod common;

use common::{DENVER, FakeProvider};
use project_tracker::application::services::{DEFAULT_TTL_SECONDS, GeocodeOutcome, GeocodeService};
use project_tracker::domain::entities::GeoResult;
use project_tracker::infrastructure::cache::{GeoCache, RedisGeoCache};
use redis::aio::ConnectionManager;
use std::sync::Arc;

fn redis_url() -> Option<String> {
    std::env::var("REDIS_URL").ok()
}

async fn raw_connection(url: &str) -> ConnectionManager {
    let client = redis::Client::open(url).unwrap();
    ConnectionManager::new(client).await.unwrap()
}

async fn ttl_of(conn: &mut ConnectionManager, key: &str) -> i64 {
    redis::cmd("TTL").arg(key).query_async(conn).await.unwrap()
}

async fn delete(conn: &mut ConnectionManager, key: &str) {
    let _: i64 = redis::cmd("DEL").arg(key).query_async(conn).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_set_writes_value_with_expiry() {
    let Some(url) = redis_url() else { return };
    let cache = RedisGeoCache::connect(&url).await.unwrap();
    let mut conn = raw_connection(&url).await;
    let key = "geo:project-tracker-test set";
    delete(&mut conn, key).await;

    cache.set(key, r#"{"lat":1.5,"lon":null}"#, 120).await.unwrap();

    assert_eq!(
        cache.get(key).await.unwrap().as_deref(),
        Some(r#"{"lat":1.5,"lon":null}"#)
    );
    let ttl = ttl_of(&mut conn, key).await;
    assert!((1..=120).contains(&ttl), "unexpected TTL {ttl}");

    delete(&mut conn, key).await;
}

#[tokio::test]
#[ignore]
async fn test_read_does_not_extend_expiry() {
    let Some(url) = redis_url() else { return };
    let cache = RedisGeoCache::connect(&url).await.unwrap();
    let mut conn = raw_connection(&url).await;
    let key = "geo:project-tracker-test sliding";
    delete(&mut conn, key).await;

    cache.set(key, "v", 120).await.unwrap();
    let before = ttl_of(&mut conn, key).await;
    cache.get(key).await.unwrap();
    let after = ttl_of(&mut conn, key).await;

    assert!(after <= before);

    delete(&mut conn, key).await;
}

#[tokio::test]
#[ignore]
async fn test_geocode_round_trip_through_redis() {
    let Some(url) = redis_url() else { return };
    let cache = Arc::new(RedisGeoCache::connect(&url).await.unwrap());
    let mut conn = raw_connection(&url).await;
    let address = "Project Tracker Test, Denver, CO";
    let key = "geo:project tracker test, denver, co";
    delete(&mut conn, key).await;

    let provider = Arc::new(FakeProvider::ok(DENVER));
    let service = GeocodeService::new(provider.clone(), cache.clone(), DEFAULT_TTL_SECONDS);

    let first = service.resolve_with_outcome(address).await;
    let second = service.resolve_with_outcome(address).await;

    assert!(matches!(first, GeocodeOutcome::Resolved(_)));
    assert_eq!(
        second,
        GeocodeOutcome::Hit(GeoResult::new(39.7392, -104.9903))
    );
    assert_eq!(provider.calls(), 1);
    assert_eq!(
        cache.get(key).await.unwrap().as_deref(),
        Some(r#"{"lat":39.7392,"lon":-104.9903}"#)
    );
    let ttl = ttl_of(&mut conn, key).await;
    assert!(ttl > (DEFAULT_TTL_SECONDS - 60) as i64);

    delete(&mut conn, key).await;
}

#[tokio::test]
#[ignore]
async fn test_health_check_and_backend() {
    let Some(url) = redis_url() else { return };
    let cache = RedisGeoCache::connect(&url).await.unwrap();

    assert!(cache.health_check().await);
    assert_eq!(cache.backend(), "redis");
}
