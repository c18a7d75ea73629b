//! Google Directions HTTP client.

use tracing::debug;

use super::DirectionsSource;
use super::error::DirectionsError;
use super::types::{DirectionsRequest, DirectionsResponse};

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsClientConfig {
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsClientConfig {
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

impl Default for DirectionsClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Google Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsClientConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl DirectionsSource for DirectionsClient {
    async fn fetch_routes(
        &self,
        request: &DirectionsRequest<'_>,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = format!("{}/directions/json", self.base_url);

        debug!(
            origin = request.origin,
            destination = request.destination,
            departure_time = ?request.departure_time,
            "querying directions"
        );

        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DirectionsClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = DirectionsClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(60);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn client_creation() {
        assert!(DirectionsClient::new(DirectionsClientConfig::default()).is_ok());
    }
}
