//! Outbound gateway traits for third-party services.
//!
//! These traits abstract the external HTTP APIs the service depends on. Concrete
//! clients live in `crate::infrastructure`, and mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Gateways
//!
//! - [`GeocodingProvider`] - Free-text address search
//! - [`ReportSource`] - Tabular project report

pub mod error;
pub mod geocoding_provider;
pub mod report_source;

pub use error::GatewayError;
pub use geocoding_provider::{GeocodingProvider, ProviderResponse};
pub use report_source::ReportSource;

#[cfg(test)]
pub use geocoding_provider::MockGeocodingProvider;
#[cfg(test)]
pub use report_source::MockReportSource;
