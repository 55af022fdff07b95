use std::sync::Arc;

use crate::application::services::{GeocodeService, ReportService};
use crate::infrastructure::cache::GeoCache;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub geocode_service: Arc<GeocodeService>,
    /// `None` when the Smartsheet token or report id is not configured.
    pub report_service: Option<Arc<ReportService>>,
    pub cache: Arc<dyn GeoCache>,
    /// Backend the configuration asked for; differs from `cache.backend()`
    /// after a startup fallback.
    pub expected_cache_backend: &'static str,
}

impl AppState {
    pub fn new(
        geocode_service: Arc<GeocodeService>,
        report_service: Option<Arc<ReportService>>,
    ) -> Self {
        let cache = Arc::clone(geocode_service.cache());
        let expected_cache_backend = cache.backend();
        Self {
            geocode_service,
            report_service,
            cache,
            expected_cache_backend,
        }
    }

    /// Records the backend the configuration selected.
    pub fn with_expected_cache_backend(mut self, backend: &'static str) -> Self {
        self.expected_cache_backend = backend;
        self
    }
}
