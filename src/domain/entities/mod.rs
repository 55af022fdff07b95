//! Core domain entities.
//!
//! - [`geo`] - Geocoding cache keys and coordinate results
//! - [`project`] - Report rows and the transformed project report

pub mod geo;
pub mod project;

pub use geo::{GeoKey, GeoResult, is_degenerate_address};
pub use project::{ProjectReport, ProjectRow, ReportColumn, SheetReport, SheetRow};
