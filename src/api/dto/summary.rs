//! DTOs for dashboard aggregates.

use serde::Serialize;

use crate::domain::progress::{OverallProgress, PhaseCount, ProjectSummary};

/// Headline numbers and per-phase counts of the project report.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: ProjectSummary,
    pub overall: OverallProgress,
    pub phases: Vec<PhaseCount>,
}
