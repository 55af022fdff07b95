#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use project_tracker::application::services::{DEFAULT_TTL_SECONDS, GeocodeService, ReportService};
use project_tracker::domain::entities::{ReportColumn, SheetReport, SheetRow};
use project_tracker::domain::gateways::{
    GatewayError, GeocodingProvider, ProviderResponse, ReportSource,
};
use project_tracker::infrastructure::cache::InMemoryGeoCache;
use project_tracker::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Geocoding provider answering every search with the same response.
pub struct FakeProvider {
    response: Result<ProviderResponse, GatewayError>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn ok(body: &str) -> Self {
        Self::with(Ok(ProviderResponse::new(200, body)))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::with(Ok(ProviderResponse::new(status, body)))
    }

    pub fn with(response: Result<ProviderResponse, GatewayError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodingProvider for FakeProvider {
    async fn search(&self, _address: &str) -> Result<ProviderResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Report source returning a fixed report or error.
pub struct FakeReportSource {
    pub report: Result<SheetReport, GatewayError>,
}

#[async_trait]
impl ReportSource for FakeReportSource {
    async fn fetch_report(&self) -> Result<SheetReport, GatewayError> {
        self.report.clone()
    }
}

pub const DENVER: &str = r#"[{"lat":"39.7392","lon":"-104.9903"}]"#;

pub fn sheet_row(id: i64, cells: &[&str]) -> SheetRow {
    SheetRow {
        id,
        cells: cells.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn sample_report() -> SheetReport {
    let mut complete = vec!["Store 1", "Complete", "", "Denver", "1600 Broadway", "CO"];
    complete.resize(21, "");
    complete[6] = "2024-01-02";
    complete[19] = "2024-06-30";

    let mut shipping = vec!["Store 2", "Shipping", "", "Boulder", "456 Oak Ave", "CO"];
    shipping.resize(21, "");
    shipping[17] = "2024-05-15";

    SheetReport {
        name: "Store Rollout".to_string(),
        total_row_count: 3,
        columns: vec![ReportColumn {
            id: Some(101),
            title: "Project Name".to_string(),
            kind: "TEXT_NUMBER".to_string(),
        }],
        rows: vec![
            sheet_row(1, &complete),
            sheet_row(2, &shipping),
            sheet_row(3, &["#NO MATCH", "", "", "Aurora", "9 Pine", "CO"]),
        ],
    }
}

pub struct TestContext {
    pub state: AppState,
    pub provider: Arc<FakeProvider>,
    pub cache: Arc<InMemoryGeoCache>,
}

pub fn create_test_state(
    provider: FakeProvider,
    report: Option<Result<SheetReport, GatewayError>>,
) -> TestContext {
    let provider = Arc::new(provider);
    let cache = Arc::new(InMemoryGeoCache::new());

    let geocoder = Arc::new(GeocodeService::new(
        provider.clone(),
        cache.clone(),
        DEFAULT_TTL_SECONDS,
    ));

    let report_service = report.map(|report| {
        Arc::new(ReportService::new(
            Arc::new(FakeReportSource { report }),
            geocoder.clone(),
            4,
        ))
    });

    TestContext {
        state: AppState::new(geocoder, report_service),
        provider,
        cache,
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
