//! # Project Tracker
//!
//! Backend of the project-tracking dashboard: serves a Smartsheet project report
//! with every row geocoded through a Redis-backed cache.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, gateway traits and dashboard aggregates
//! - **Application Layer** ([`application`]) - Geocoding cache-aside and report transform
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache store, Nominatim and Smartsheet clients
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Geocoding
//!
//! Addresses are resolved by [`application::services::GeocodeService`]: the
//! lower-cased address is looked up under `geo:<address>`, and on a miss the
//! Nominatim result (or a `null` pair on any failure) is written back for 180 days.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export SMARTSHEET_API_ACCESS_TOKEN="..."
//! export SMARTSHEET_REPORT_ID="1234567890"
//! export NOMINATIM_USER_AGENT="project-tracker/0.1 (ops@example.com)"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{GeocodeOutcome, GeocodeService, ReportService};
    pub use crate::domain::entities::{GeoKey, GeoResult, ProjectReport, ProjectRow};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{GeoCache, InMemoryGeoCache};
    pub use crate::state::AppState;
}
