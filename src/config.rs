//! Runtime settings read from the process environment.
//!
//! [`load_from_env`] reads every variable once and validates the result; the
//! server and the `geocache` CLI share it. A `.env` file is honoured when the
//! binaries call `dotenvy::dotenv()` first.
//!
//! ## Cache Store
//!
//! Either a complete URL:
//!
//! ```bash
//! export REDIS_URL="redis://cache.internal:6379/2"
//! ```
//!
//! or its parts (`REDIS_HOST` is required, the rest default to `6379`, no
//! password and database `0`):
//!
//! ```bash
//! export REDIS_HOST="cache.internal"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD="s3cret"
//! export REDIS_DB="2"
//! ```
//!
//! With neither set, geocodes live in process memory and are lost on restart.
//!
//! ## Report Source
//!
//! `SMARTSHEET_API_ACCESS_TOKEN` and `SMARTSHEET_REPORT_ID` must both be set for
//! the report endpoints to work; `SMARTSHEET_API_URL` overrides the API base.
//!
//! ## Everything Else
//!
//! | Variable | Default |
//! |---|---|
//! | `LISTEN` | `0.0.0.0:3000` |
//! | `RUST_LOG` | `info` |
//! | `LOG_FORMAT` | `text` (`json` for structured output) |
//! | `GEOCODE_CACHE_TTL_SECONDS` | `15552000` (180 days) |
//! | `GEOCODE_CONCURRENCY` | `4` |
//! | `NOMINATIM_URL` | public OpenStreetMap endpoint |
//! | `NOMINATIM_USER_AGENT` | `project-tracker/<version>` |

use anyhow::{Context, Result, bail};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use url::Url;

use crate::application::services::DEFAULT_TTL_SECONDS;
use crate::infrastructure::geocoding::DEFAULT_NOMINATIM_URL;
use crate::infrastructure::smartsheet::DEFAULT_SMARTSHEET_API_URL;

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
const DEFAULT_CONCURRENCY: usize = 4;
const MAX_CONCURRENCY: usize = 64;
/// Ten years.
const MAX_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` selects the in-memory cache.
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub geocode_cache_ttl_seconds: u64,
    /// Report rows geocoded at the same time.
    pub geocode_concurrency: usize,
    pub nominatim_url: String,
    /// Nominatim rejects anonymous clients, so this is never blank.
    pub nominatim_user_agent: String,
    pub smartsheet_api_url: String,
    pub smartsheet_access_token: Option<String>,
    pub smartsheet_report_id: Option<String>,
}

impl Config {
    /// Reads the environment, substituting defaults for unset variables.
    ///
    /// Nothing is checked here; see [`Config::validate`].
    pub fn from_env() -> Self {
        Self {
            redis_url: Self::load_redis_url(),
            listen_addr: var_or("LISTEN", DEFAULT_LISTEN),
            log_level: var_or("RUST_LOG", "info"),
            log_format: var_or("LOG_FORMAT", "text"),
            geocode_cache_ttl_seconds: parsed_var("GEOCODE_CACHE_TTL_SECONDS")
                .unwrap_or(DEFAULT_TTL_SECONDS),
            geocode_concurrency: parsed_var("GEOCODE_CONCURRENCY").unwrap_or(DEFAULT_CONCURRENCY),
            nominatim_url: var_or("NOMINATIM_URL", DEFAULT_NOMINATIM_URL),
            nominatim_user_agent: non_empty_var("NOMINATIM_USER_AGENT")
                .unwrap_or_else(default_user_agent),
            smartsheet_api_url: var_or("SMARTSHEET_API_URL", DEFAULT_SMARTSHEET_API_URL),
            smartsheet_access_token: non_empty_var("SMARTSHEET_API_ACCESS_TOKEN"),
            smartsheet_report_id: non_empty_var("SMARTSHEET_REPORT_ID"),
        }
    }

    /// `REDIS_URL` if set, otherwise a URL assembled from `REDIS_HOST` and friends.
    fn load_redis_url() -> Option<String> {
        if let Some(url) = non_empty_var("REDIS_URL") {
            return Some(url);
        }

        let host = non_empty_var("REDIS_HOST")?;
        let port = var_or("REDIS_PORT", "6379");
        let db = var_or("REDIS_DB", "0");

        Some(match non_empty_var("REDIS_PASSWORD") {
            Some(password) => format!("redis://:{password}@{host}:{port}/{db}"),
            None => format!("redis://{host}:{port}/{db}"),
        })
    }

    /// Checks formats and ranges.
    ///
    /// # Errors
    ///
    /// Fails on the first offending variable, naming it in the message.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.log_format.as_str(), "text" | "json") {
            bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", self.log_format);
        }

        SocketAddr::from_str(&self.listen_addr)
            .with_context(|| format!("LISTEN is not a socket address: '{}'", self.listen_addr))?;

        if let Some(redis_url) = &self.redis_url {
            let url = Url::parse(redis_url)
                .with_context(|| format!("REDIS_URL is invalid: '{}'", mask_password(redis_url)))?;
            if !matches!(url.scheme(), "redis" | "rediss") {
                bail!("REDIS_URL scheme must be redis or rediss, got '{}'", url.scheme());
            }
        }

        if !(1..=MAX_TTL_SECONDS).contains(&self.geocode_cache_ttl_seconds) {
            bail!(
                "GEOCODE_CACHE_TTL_SECONDS must be within 1..={}, got {}",
                MAX_TTL_SECONDS,
                self.geocode_cache_ttl_seconds
            );
        }

        if !(1..=MAX_CONCURRENCY).contains(&self.geocode_concurrency) {
            bail!(
                "GEOCODE_CONCURRENCY must be within 1..={}, got {}",
                MAX_CONCURRENCY,
                self.geocode_concurrency
            );
        }

        require_http_url("NOMINATIM_URL", &self.nominatim_url)?;
        require_http_url("SMARTSHEET_API_URL", &self.smartsheet_api_url)?;

        if self.nominatim_user_agent.trim().is_empty() {
            bail!("NOMINATIM_USER_AGENT must not be blank");
        }

        Ok(())
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.redis_url.is_some()
    }

    /// Token and report id, if both are configured.
    pub fn smartsheet_credentials(&self) -> Option<(&str, &str)> {
        self.smartsheet_access_token
            .as_deref()
            .zip(self.smartsheet_report_id.as_deref())
    }

    /// Logs the effective settings. Passwords and tokens are never printed.
    pub fn print_summary(&self) {
        tracing::info!(
            listen = %self.listen_addr,
            log_level = %self.log_level,
            log_format = %self.log_format,
            "Configuration loaded"
        );

        match &self.redis_url {
            Some(url) => tracing::info!(url = %mask_password(url), "Geocode cache: redis"),
            None => tracing::info!("Geocode cache: in-memory"),
        }

        tracing::info!(
            endpoint = %self.nominatim_url,
            ttl_seconds = self.geocode_cache_ttl_seconds,
            concurrency = self.geocode_concurrency,
            "Geocoder"
        );

        match self.smartsheet_credentials() {
            Some((_, report_id)) => tracing::info!(report_id, "Smartsheet report configured"),
            None => tracing::warn!("Smartsheet not configured, report endpoints will fail"),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.trim().parse().ok()
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn require_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is invalid: '{value}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{name} must be an http(s) URL, got '{value}'");
    }
    Ok(())
}

/// Replaces the password of a connection URL with `***`.
///
/// Unparseable input is returned unchanged.
fn mask_password(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            // Only fails for cannot-be-a-base URLs, which carry no password.
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => raw.to_string(),
    }
}

/// Reads and validates the configuration.
///
/// # Errors
///
/// Returns the first validation failure.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
