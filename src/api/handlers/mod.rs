//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod geocode;
pub mod health;
pub mod report;

pub use geocode::geocode_handler;
pub use health::health_handler;
pub use report::{locations_handler, report_handler, summary_handler};
