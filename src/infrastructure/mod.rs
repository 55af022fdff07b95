//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete clients for the cache store and third-party HTTP APIs.
//!
//! # Modules
//!
//! - [`cache`] - Geocode cache store (Redis and in-memory implementations)
//! - [`geocoding`] - Nominatim search client
//! - [`smartsheet`] - Smartsheet reports client

pub mod cache;
pub mod geocoding;
pub mod smartsheet;
