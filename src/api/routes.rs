//! API route configuration.

use crate::api::handlers::{geocode_handler, locations_handler, report_handler, summary_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /geocode`               - Resolve one address through the geocode cache
/// - `GET /smartsheet`            - Geocoded project report
/// - `GET /smartsheet/summary`    - Headline numbers and per-phase counts
/// - `GET /smartsheet/locations`  - Map markers for geocoded projects
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/geocode", get(geocode_handler))
        .route("/smartsheet", get(report_handler))
        .route("/smartsheet/summary", get(summary_handler))
        .route("/smartsheet/locations", get(locations_handler))
}
