//! GVB disruption feed HTTP client.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use tracing::debug;

use super::DisruptionSource;
use super::error::DisruptionError;
use super::types::DisruptionRecord;

/// Default base URL for the GVB travel information API.
const DEFAULT_BASE_URL: &str =
    "https://www.gvb.nl/api/gvb-shared-services/travelinformation/api/v1";

/// Path of the conveyance disruption listing.
const DISRUPTIONS_PATH: &str = "/Disruption/GetConveyanceDisruptions";

/// Language of the free-text fields in the response.
const LANGUAGE: &str = "en";

/// The feed sits behind the public website and rejects requests that do not
/// look like they come from it.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";
const REFERER_URL: &str = "https://www.gvb.nl/en/travel-information/conveyances";

/// Configuration for the disruption client.
#[derive(Debug, Clone)]
pub struct DisruptionClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DisruptionClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
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

impl Default for DisruptionClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the GVB conveyance disruption feed.
#[derive(Debug, Clone)]
pub struct DisruptionClient {
    http: reqwest::Client,
    base_url: String,
}

impl DisruptionClient {
    /// Create a new disruption client.
    pub fn new(config: DisruptionClientConfig) -> Result<Self, DisruptionError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9,nl;q=0.8"),
        );
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl DisruptionSource for DisruptionClient {
    async fn fetch_disruptions(&self) -> Result<Vec<DisruptionRecord>, DisruptionError> {
        let url = format!("{}{}", self.base_url, DISRUPTIONS_PATH);

        let response = self
            .http
            .get(&url)
            .query(&[("language", LANGUAGE)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DisruptionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        // An empty body means there are no disruptions.
        if body.trim().is_empty() {
            debug!("disruption feed returned an empty body");
            return Ok(Vec::new());
        }

        let records: Vec<DisruptionRecord> =
            serde_json::from_str(&body).map_err(|e| DisruptionError::Json {
                message: e.to_string(),
            })?;

        debug!(count = records.len(), "fetched disruptions");
        Ok(records)
    }
}
