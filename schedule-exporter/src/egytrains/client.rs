//! egytrains HTTP client.
//!
//! Provides an async method for fetching one station's schedule
//! document. Handles URL composition (station names become a single
//! percent-encoded path segment) and parsing into DTOs.

use tracing::debug;
use url::Url;

use super::error::EgytrainsError;
use super::types::{ScheduleDocument, TrainsResponse};

/// Default base URL for station schedule documents.
///
/// The `_next/data/<build id>` segments pin a specific deployment of
/// the site; when egytrains.com redeploys, this starts returning 404
/// and the base URL has to be overridden.
const DEFAULT_BASE_URL: &str = "https://egytrains.com/_next/data/8KEk8nmc9-2UCQW_WO3Dz/trains";

/// Configuration for the egytrains client.
#[derive(Debug, Clone)]
pub struct EgytrainsConfig {
    /// Base URL for schedule documents (defaults to the production site)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EgytrainsConfig {
    /// Create a new config with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for a new build id, or for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for EgytrainsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// egytrains schedule document client.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct EgytrainsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EgytrainsClient {
    /// Create a new egytrains client with the given configuration.
    ///
    /// Fails if the configured base URL does not parse as a
    /// hierarchical URL.
    pub fn new(config: EgytrainsConfig) -> Result<Self, EgytrainsError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| EgytrainsError::BaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(EgytrainsError::BaseUrl(format!(
                "{}: not a hierarchical URL",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch and parse the schedule document for one station name.
    ///
    /// Any failure (network, non-success status, unparseable body)
    /// means the document is unavailable for this run; there are no
    /// retries.
    pub async fn get_schedule(
        &self,
        station_name: &str,
    ) -> Result<ScheduleDocument, EgytrainsError> {
        let url = self.document_url(station_name);

        debug!("fetching schedule document {url}");

        let response = self.http.get(url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EgytrainsError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: TrainsResponse = serde_json::from_str(&body).map_err(|e| {
            debug!(
                "unparseable document for {station_name}: {}",
                body.chars().take(500).collect::<String>()
            );
            EgytrainsError::Json {
                message: e.to_string(),
            }
        })?;

        Ok(parsed.page_props.data)
    }

    /// Compose the document URL for a station name.
    ///
    /// The name goes in as one path segment, so spaces and reserved
    /// characters are percent-encoded rather than splitting the path.
    fn document_url(&self, station_name: &str) -> Url {
        let mut url = self.base_url.clone();

        // new() rejects non-hierarchical bases, so segments are always available
        url.path_segments_mut()
            .expect("base URL is hierarchical")
            .pop_if_empty()
            .push(&format!("{station_name}.json"));

        url
    }
}
