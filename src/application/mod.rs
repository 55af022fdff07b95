//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating gateway calls,
//! the cache store, and filtering rules. Services consume gateway traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::geocode_service::GeocodeService`] - Cache-aside address geocoding
//! - [`services::report_service::ReportService`] - Project report transform

pub mod services;
