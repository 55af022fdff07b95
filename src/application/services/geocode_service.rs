//! Cache-aside geocoding.
//!
//! Resolves a free-text address to coordinates, consulting the shared cache store
//! before calling the geocoding provider. Every lookup that is not a cache hit
//! writes its result back, including negative results, so a failing or empty
//! address costs at most one provider call per TTL.
//!
//! # Metrics
//!
//! Each lookup increments `geocode_lookups_total{outcome}` through the `metrics`
//! facade. The crate installs no recorder; without one the counter is a no-op,
//! so a deployment that wants it exported installs a recorder before starting
//! the server.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::entities::{GeoKey, GeoResult, is_degenerate_address};
use crate::domain::gateways::GeocodingProvider;
use crate::infrastructure::cache::GeoCache;

/// Entries expire 180 days after being written.
pub const DEFAULT_TTL_SECONDS: u64 = 60 * 60 * 24 * 180;

/// Length of the body prefix logged when the provider answers with garbage.
const BODY_SNIPPET_CHARS: usize = 200;

/// How a lookup was answered.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    /// Unexpired entry found in the cache store. Nothing was written.
    Hit(GeoResult),
    /// Empty or blank-report address; the provider was not called.
    DegenerateInput,
    /// Transport failure or non-success status.
    ProviderError { reason: String },
    /// The provider body was not valid JSON.
    ParseError,
    /// Valid JSON without a first result.
    EmptyResult,
    /// First result of the provider.
    Resolved(GeoResult),
}

impl GeocodeOutcome {
    /// Coordinates carried by this outcome.
    pub fn result(&self) -> GeoResult {
        match self {
            Self::Hit(result) | Self::Resolved(result) => *result,
            Self::DegenerateInput
            | Self::ProviderError { .. }
            | Self::ParseError
            | Self::EmptyResult => GeoResult::none(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hit(_) => "hit",
            Self::DegenerateInput => "degenerate_input",
            Self::ProviderError { .. } => "provider_error",
            Self::ParseError => "parse_error",
            Self::EmptyResult => "empty_result",
            Self::Resolved(_) => "resolved",
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Geocoding service with a negative-caching cache-aside policy.
///
/// Concurrent calls for the same uncached address are not coalesced: each may
/// reach the provider, and the last write wins.
pub struct GeocodeService {
    provider: Arc<dyn GeocodingProvider>,
    cache: Arc<dyn GeoCache>,
    ttl_seconds: u64,
}

impl GeocodeService {
    /// Creates a geocoding service.
    ///
    /// # Arguments
    ///
    /// - `provider` - external geocoding search API
    /// - `cache` - shared store for results
    /// - `ttl_seconds` - lifetime of every written entry
    pub fn new(
        provider: Arc<dyn GeocodingProvider>,
        cache: Arc<dyn GeoCache>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl_seconds,
        }
    }

    pub fn cache(&self) -> &Arc<dyn GeoCache> {
        &self.cache
    }

    /// Resolves an address to coordinates. Never fails.
    pub async fn resolve(&self, address: &str) -> GeoResult {
        self.resolve_with_outcome(address).await.result()
    }

    /// Resolves an address and reports which path produced the answer.
    ///
    /// # Lookup Flow
    ///
    /// 1. Derive the key `geo:<lower-cased address>`
    /// 2. Return an unexpired cache entry as-is
    /// 3. Skip the provider for empty addresses and the blank-report sentinel
    /// 4. Query the provider and classify its answer
    /// 5. Write the result under the key with the configured TTL
    pub async fn resolve_with_outcome(&self, address: &str) -> GeocodeOutcome {
        let key = GeoKey::from_address(address);

        let outcome = match self.read_cached(&key).await {
            Some(cached) => GeocodeOutcome::Hit(cached),
            None => {
                let outcome = self.lookup(address).await;
                self.store(&key, outcome.result()).await;
                outcome
            }
        };

        metrics::counter!("geocode_lookups_total", "outcome" => outcome.label()).increment(1);
        outcome
    }

    /// Reads the cached result without contacting the provider.
    pub async fn cached(&self, address: &str) -> Option<GeoResult> {
        self.read_cached(&GeoKey::from_address(address)).await
    }

    async fn read_cached(&self, key: &GeoKey) -> Option<GeoResult> {
        let raw = match self.cache.get(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                return None;
            }
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<GeoResult>(&raw) {
            Ok(result) => {
                debug!("Cache HIT: {}", key);
                Some(result)
            }
            Err(e) => {
                warn!("Discarding unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn store(&self, key: &GeoKey, result: GeoResult) {
        let value = match serde_json::to_string(&result) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to serialize geocode result for {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key.as_str(), &value, self.ttl_seconds).await {
            warn!("Cache write failed for {}: {}", key, e);
        }
    }

    async fn lookup(&self, address: &str) -> GeocodeOutcome {
        if is_degenerate_address(address) {
            return GeocodeOutcome::DegenerateInput;
        }

        let response = match self.provider.search(address).await {
            Ok(response) => response,
            Err(e) => {
                error!("Geocoding request failed for {}: {}", address, e);
                return GeocodeOutcome::ProviderError {
                    reason: e.to_string(),
                };
            }
        };

        if !response.is_success() {
            error!(
                "Geocoding provider error {} for {}",
                response.status, address
            );
            return GeocodeOutcome::ProviderError {
                reason: format!("HTTP {}", response.status),
            };
        }

        classify_body(address, &response.body)
    }
}

fn classify_body(address: &str, body: &str) -> GeocodeOutcome {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => {
            let snippet: String = body.chars().take(BODY_SNIPPET_CHARS).collect();
            error!(
                "Invalid JSON from geocoding provider for {}: {}",
                address, snippet
            );
            return GeocodeOutcome::ParseError;
        }
    };

    match json.get(0).filter(|first| is_present(first)) {
        Some(first) => GeocodeOutcome::Resolved(GeoResult {
            lat: coordinate(first.get("lat")),
            lon: coordinate(first.get("lon")),
        }),
        None => GeocodeOutcome::EmptyResult,
    }
}

/// False for `null`, `false`, `0` and `""`, which count as no result.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces a coordinate given as a JSON number or numeric string.
fn coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
