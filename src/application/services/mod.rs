//! Business logic services for the application layer.

pub mod geocode_service;
pub mod report_service;

pub use geocode_service::{DEFAULT_TTL_SECONDS, GeocodeOutcome, GeocodeService};
pub use report_service::ReportService;
