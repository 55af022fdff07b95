//! Project report transform.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use super::geocode_service::GeocodeService;
use crate::domain::entities::{ProjectReport, ProjectRow};
use crate::domain::gateways::{GatewayError, ReportSource};

/// Turns the raw project report into geocoded, filtered project rows.
pub struct ReportService {
    source: Arc<dyn ReportSource>,
    geocoder: Arc<GeocodeService>,
    concurrency: usize,
}

impl ReportService {
    /// Creates a report service.
    ///
    /// `concurrency` bounds the number of addresses geocoded at once; values
    /// below 1 are raised to 1.
    pub fn new(
        source: Arc<dyn ReportSource>,
        geocoder: Arc<GeocodeService>,
        concurrency: usize,
    ) -> Self {
        Self {
            source,
            geocoder,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetches the report, geocodes every row and drops unusable rows.
    ///
    /// Rows keep the report order. Geocoding never fails; rows without a
    /// position carry `null` coordinates.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] of the report source.
    pub async fn fetch_projects(&self) -> Result<ProjectReport, GatewayError> {
        let report = self.source.fetch_report().await?;
        debug!(
            "Report '{}' fetched with {} rows",
            report.name,
            report.rows.len()
        );

        let mapped: Vec<ProjectRow> = report.rows.iter().map(ProjectRow::from_sheet_row).collect();

        let geocoder = Arc::clone(&self.geocoder);
        let rows: Vec<ProjectRow> = stream::iter(mapped)
            .map(move |row| {
                let geocoder = Arc::clone(&geocoder);
                async move {
                    let coords = geocoder.resolve(&row.full_address()).await;
                    row.with_coordinates(coords)
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let fetched = rows.len();
        let rows: Vec<ProjectRow> = rows.into_iter().filter(ProjectRow::is_usable).collect();
        info!(
            "Report '{}': {} of {} rows usable",
            report.name,
            rows.len(),
            fetched
        );

        Ok(ProjectReport {
            name: report.name,
            total_row_count: report.total_row_count,
            columns: report.columns,
            rows,
        })
    }
}
