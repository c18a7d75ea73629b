//! OpenWeatherMap HTTP client.

use tracing::debug;

use super::WeatherSource;
use super::error::WeatherError;
use super::types::ForecastResponse;

/// Default base URL for the OpenWeatherMap data API.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherClientConfig {
    /// Base URL for the API (defaults to production OpenWeatherMap)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherClientConfig {
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

impl Default for WeatherClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OpenWeatherMap forecast client.
///
/// The key is passed per request; it lives with [`super::WeatherLookup`].
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client with the given configuration.
    pub fn new(config: WeatherClientConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl WeatherSource for WeatherClient {
    async fn fetch_forecast(
        &self,
        api_key: &str,
        lat: f64,
        lon: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.base_url);

        debug!(lat, lon, "fetching forecast");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| WeatherError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = WeatherClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = WeatherClientConfig::new()
            .with_base_url("http://localhost:9000")
            .with_timeout(3);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn client_creation() {
        assert!(WeatherClient::new(WeatherClientConfig::default()).is_ok());
    }
}
