//! OpenStreetMap Nominatim search client.

use crate::domain::gateways::{GatewayError, GeocodingProvider, ProviderResponse};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use tracing::debug;

/// Public Nominatim search endpoint.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim `/search` client.
///
/// Every request carries the configured `User-Agent`, which the Nominatim usage
/// policy requires to identify the application.
pub struct NominatimProvider {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl NominatimProvider {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GeocodingProvider for NominatimProvider {
    async fn search(&self, address: &str) -> Result<ProviderResponse, GatewayError> {
        debug!("Nominatim search: {}", address);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("limit", "1"), ("q", address)])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ProviderResponse { status, body })
    }
}
