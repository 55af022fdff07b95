//! Handler for single-address geocoding.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::geocode::{GeocodeQuery, GeocodeResponse};
use crate::domain::entities::GeoKey;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves one address through the geocode cache.
///
/// # Endpoint
///
/// `GET /api/geocode?address=<free text>`
///
/// # Response
///
/// ```json
/// {
///   "address": "1600 Broadway, Denver, CO",
///   "key": "geo:1600 broadway, denver, co",
///   "lat": 39.7392,
///   "lon": -104.9903,
///   "outcome": "hit"
/// }
/// ```
///
/// Provider failures are not errors: they answer `200` with `null`
/// coordinates and the failing outcome.
///
/// # Errors
///
/// Returns 400 Bad Request if `address` is missing or too long.
pub async fn geocode_handler(
    State(state): State<AppState>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, AppError> {
    params
        .validate()
        .map_err(|e| AppError::bad_request("Invalid query", json!({ "errors": e.to_string() })))?;

    let address = params.address.ok_or_else(|| {
        AppError::bad_request(
            "Missing query parameter",
            json!({ "parameter": "address" }),
        )
    })?;

    let outcome = state.geocode_service.resolve_with_outcome(&address).await;
    let key = GeoKey::from_address(&address).to_string();

    Ok(Json(GeocodeResponse::new(address, key, &outcome)))
}
