//! Smartsheet HTTP client.

use super::model::ReportPayload;
use crate::domain::entities::SheetReport;
use crate::domain::gateways::{GatewayError, ReportSource};
use async_trait::async_trait;
use tracing::debug;

/// Smartsheet API v2 base URL.
pub const DEFAULT_SMARTSHEET_API_URL: &str = "https://api.smartsheet.com/2.0";

/// Fetches one configured report using a bearer access token.
pub struct SmartsheetClient {
    client: reqwest::Client,
    report_url: String,
    access_token: String,
}

impl SmartsheetClient {
    /// Creates a client for `{api_url}/reports/{report_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        api_url: &str,
        report_id: &str,
        access_token: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            report_url: format!("{}/reports/{}", api_url.trim_end_matches('/'), report_id),
            access_token: access_token.into(),
        })
    }

    pub fn report_url(&self) -> &str {
        &self.report_url
    }
}

#[async_trait]
impl ReportSource for SmartsheetClient {
    async fn fetch_report(&self) -> Result<SheetReport, GatewayError> {
        debug!("Fetching report {}", self.report_url);

        let response = self
            .client
            .get(&self.report_url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let payload: ReportPayload = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(payload.into())
    }
}
