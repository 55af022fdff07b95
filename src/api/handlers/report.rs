//! Handlers for the project report and its aggregates.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::summary::SummaryResponse;
use crate::domain::entities::ProjectReport;
use crate::domain::progress::{self, ProjectLocation};
use crate::error::{AppError, map_report_error};
use crate::state::AppState;

/// Returns the geocoded project report.
///
/// # Endpoint
///
/// `GET /api/smartsheet`
///
/// # Response
///
/// ```json
/// {
///   "name": "Store Rollout",
///   "totalRowCount": 42,
///   "columns": [{ "id": 1, "title": "Project Name", "type": "TEXT_NUMBER" }],
///   "rows": [{ "id": 7, "project_name": "Store 12", "city": "Denver", "lat": 39.7, "lon": -104.9 }]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 if the report source is not configured or fails.
pub async fn report_handler(
    State(state): State<AppState>,
) -> Result<Json<ProjectReport>, AppError> {
    Ok(Json(load_projects(&state).await?))
}

/// Returns headline numbers and per-phase counts.
///
/// # Endpoint
///
/// `GET /api/smartsheet/summary`
pub async fn summary_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let report = load_projects(&state).await?;

    Ok(Json(SummaryResponse {
        summary: progress::project_summary(&report.rows),
        overall: progress::overall_progress(&report.rows),
        phases: progress::phase_progress(&report.rows),
    }))
}

/// Returns map markers for geocoded projects.
///
/// # Endpoint
///
/// `GET /api/smartsheet/locations`
pub async fn locations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectLocation>>, AppError> {
    let report = load_projects(&state).await?;
    Ok(Json(progress::locations(&report.rows)))
}

async fn load_projects(state: &AppState) -> Result<ProjectReport, AppError> {
    let service = state.report_service.as_ref().ok_or_else(|| {
        AppError::internal("Missing Smartsheet configuration", json!({}))
    })?;

    service.fetch_projects().await.map_err(map_report_error)
}
