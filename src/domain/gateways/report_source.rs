//! Gateway trait for the project report API.

use super::GatewayError;
use crate::domain::entities::SheetReport;
use async_trait::async_trait;

/// Fetches the project report with cells already reduced to text.
///
/// # Implementations
///
/// - [`crate::infrastructure::smartsheet::SmartsheetClient`] - Smartsheet reports API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`GatewayError::Status`] on a non-success response,
    /// [`GatewayError::Decode`] on an unexpected body and
    /// [`GatewayError::Transport`] on connection failures.
    async fn fetch_report(&self) -> Result<SheetReport, GatewayError>;
}
