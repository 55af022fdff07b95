//! Smartsheet reports API client.

mod client;
mod model;

pub use client::{DEFAULT_SMARTSHEET_API_URL, SmartsheetClient};
