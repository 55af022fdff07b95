//! Gateway trait for the external geocoding search API.

use super::GatewayError;
use async_trait::async_trait;

/// Raw answer of the geocoding provider.
///
/// The body is kept as text so that status and payload checks stay with the
/// caller, which decides how each failure is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Searches coordinates for a free-text address.
///
/// # Implementations
///
/// - [`crate::infrastructure::geocoding::NominatimProvider`] - OpenStreetMap Nominatim
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Issues one search request limited to a single result.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] when no response could be obtained.
    /// Non-success statuses are returned as a [`ProviderResponse`], not as errors.
    async fn search(&self, address: &str) -> Result<ProviderResponse, GatewayError>;
}
