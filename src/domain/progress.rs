//! Project phase derivation and dashboard aggregates.
//!
//! A project's phase is derived from which milestone dates are filled in; a
//! separate classification reads the free-text status column for map markers.

use serde::Serialize;

use crate::domain::entities::ProjectRow;

/// Rollout phase of a project, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Planning,
    Permitting,
    Production,
    Shipping,
    Installation,
    Complete,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Planning,
        Phase::Permitting,
        Phase::Production,
        Phase::Shipping,
        Phase::Installation,
        Phase::Complete,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Planning => "Planning",
            Phase::Permitting => "Permitting",
            Phase::Production => "Production",
            Phase::Shipping => "Shipping",
            Phase::Installation => "Installation",
            Phase::Complete => "Complete",
        }
    }

    /// Lower-case status slug.
    pub fn slug(self) -> &'static str {
        match self {
            Phase::Planning => "planning",
            Phase::Permitting => "permitting",
            Phase::Production => "production",
            Phase::Shipping => "shipping",
            Phase::Installation => "installation",
            Phase::Complete => "complete",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Phase at `index`, falling back to [`Phase::Planning`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Phase::Planning)
    }
}

fn is_set(field: &str) -> bool {
    !field.is_empty()
}

/// Phase implied by the latest completed milestone.
pub fn current_phase(project: &ProjectRow) -> Phase {
    if is_set(&project.install_complete) {
        Phase::Complete
    } else if is_set(&project.install_start) {
        Phase::Installation
    } else if is_set(&project.ship_date_schedule) {
        Phase::Shipping
    } else if is_set(&project.production_released) {
        Phase::Production
    } else if is_set(&project.permit_approved) {
        Phase::Permitting
    } else {
        Phase::Planning
    }
}

/// Phase named by the free-text status column.
pub fn status_from_label(project: &ProjectRow) -> Phase {
    let status = project.project_status.to_lowercase();

    [
        Phase::Complete,
        Phase::Installation,
        Phase::Shipping,
        Phase::Production,
        Phase::Permitting,
    ]
    .into_iter()
    .find(|phase| status.contains(phase.slug()))
    .unwrap_or(Phase::Planning)
}

/// Number of projects currently in a phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCount {
    pub phase: &'static str,
    pub count: usize,
}

/// Counts projects per current phase. All phases are listed, in order.
pub fn phase_progress(projects: &[ProjectRow]) -> Vec<PhaseCount> {
    let mut counts = [0usize; Phase::ALL.len()];
    for project in projects {
        counts[current_phase(project).index()] += 1;
    }

    Phase::ALL
        .iter()
        .zip(counts)
        .map(|(phase, count)| PhaseCount {
            phase: phase.name(),
            count,
        })
        .collect()
}

/// Milestone-based progress across all projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallProgress {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub current_phase_index: usize,
    pub current_phase: &'static str,
    pub progress_percentage: u32,
}

pub fn overall_progress(projects: &[ProjectRow]) -> OverallProgress {
    let total_projects = projects.len();
    let completed_projects = projects
        .iter()
        .filter(|p| is_set(&p.install_complete))
        .count();

    let phase_sum: usize = projects.iter().map(|p| current_phase(p).index()).sum();
    let current_phase_index = phase_sum.checked_div(total_projects).unwrap_or(0);

    OverallProgress {
        total_projects,
        completed_projects,
        current_phase_index,
        current_phase: Phase::from_index(current_phase_index).name(),
        progress_percentage: percentage(completed_projects, total_projects),
    }
}

/// Status-column based headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub in_progress_projects: usize,
    pub planned_projects: usize,
    pub completion_percentage: u32,
}

pub fn project_summary(projects: &[ProjectRow]) -> ProjectSummary {
    let total_projects = projects.len();
    let completed_projects = projects
        .iter()
        .filter(|p| p.project_status.to_lowercase().contains("complete"))
        .count();
    let planned_projects = projects
        .iter()
        .filter(|p| !is_set(&p.survey_requested))
        .count();

    ProjectSummary {
        total_projects,
        completed_projects,
        in_progress_projects: total_projects - completed_projects,
        planned_projects,
        completion_percentage: percentage(completed_projects, total_projects),
    }
}

/// A map marker for a geocoded project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectLocation {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub text: String,
    pub status: Phase,
}

/// Markers for every project with both coordinates.
pub fn locations(projects: &[ProjectRow]) -> Vec<ProjectLocation> {
    projects
        .iter()
        .filter_map(|p| {
            let (lat, lng) = p.lat.zip(p.lon)?;
            Some(ProjectLocation {
                id: p.id,
                lat,
                lng,
                text: p.project_name.clone(),
                status: status_from_label(p),
            })
        })
        .collect()
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
