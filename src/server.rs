//! HTTP server initialization and runtime setup.
//!
//! Handles cache connection, gateway clients, service wiring, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::{GeocodeService, ReportService};
use crate::config::Config;
use crate::infrastructure::cache::{GeoCache, InMemoryGeoCache, REDIS_BACKEND, RedisGeoCache};
use crate::infrastructure::geocoding::NominatimProvider;
use crate::infrastructure::smartsheet::SmartsheetClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the geocode cache store.
///
/// Uses Redis when configured and reachable, otherwise an in-memory store.
pub async fn connect_cache(config: &Config) -> Arc<dyn GeoCache> {
    match &config.redis_url {
        Some(redis_url) => match RedisGeoCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
                Arc::new(InMemoryGeoCache::new())
            }
        },
        None => {
            tracing::info!("Redis not configured, using in-memory cache");
            Arc::new(InMemoryGeoCache::new())
        }
    }
}

/// Builds the geocoding service on top of `cache`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_geocode_service(config: &Config, cache: Arc<dyn GeoCache>) -> Result<GeocodeService> {
    let provider = NominatimProvider::new(&config.nominatim_url, &config.nominatim_user_agent)
        .context("Failed to create geocoding client")?;

    Ok(GeocodeService::new(
        Arc::new(provider),
        cache,
        config.geocode_cache_ttl_seconds,
    ))
}

/// Builds the report service when Smartsheet credentials are configured.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_report_service(
    config: &Config,
    geocoder: Arc<GeocodeService>,
) -> Result<Option<ReportService>> {
    let Some((token, report_id)) = config.smartsheet_credentials() else {
        return Ok(None);
    };

    let client = SmartsheetClient::new(&config.smartsheet_api_url, report_id, token)
        .context("Failed to create Smartsheet client")?;

    Ok(Some(ReportService::new(
        Arc::new(client),
        geocoder,
        config.geocode_concurrency,
    )))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Geocode cache store (Redis or in-memory fallback)
/// - Nominatim and Smartsheet clients
/// - Axum HTTP server
///
/// The cache connection is released after the server has drained.
///
/// # Errors
///
/// Returns an error if:
/// - An HTTP client cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;

    let geocoder = Arc::new(build_geocode_service(&config, Arc::clone(&cache))?);
    let report_service = build_report_service(&config, Arc::clone(&geocoder))?.map(Arc::new);

    let mut state = AppState::new(geocoder, report_service);
    if config.is_cache_enabled() {
        state = state.with_expected_cache_backend(REDIS_BACKEND);
    }
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    let backend = cache.backend();
    drop(cache);
    tracing::info!("Server stopped, {} cache released", backend);

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
