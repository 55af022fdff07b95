//! DTOs for the geocoding endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::GeocodeOutcome;

/// Query string of `GET /api/geocode`.
///
/// An empty `address` is accepted and takes the degenerate-input path.
#[derive(Debug, Deserialize, Validate)]
pub struct GeocodeQuery {
    #[validate(length(max = 1024, message = "Address is too long"))]
    pub address: Option<String>,
}

/// Coordinates resolved for one address.
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub address: String,
    pub key: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub outcome: &'static str,
}

impl GeocodeResponse {
    pub fn new(address: String, key: String, outcome: &GeocodeOutcome) -> Self {
        let result = outcome.result();
        Self {
            address,
            key,
            lat: result.lat,
            lon: result.lon,
            outcome: outcome.label(),
        }
    }
}
