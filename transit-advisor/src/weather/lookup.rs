//! Forecast lookup at a point in time.

use tracing::debug;

use super::WeatherSource;
use super::error::WeatherError;
use super::types::ForecastSample;

/// Weather lookup component: a forecast source plus the key to use with it.
#[derive(Clone)]
pub struct WeatherLookup<W> {
    source: W,
    api_key: Option<String>,
}

impl<W: WeatherSource> WeatherLookup<W> {
    pub fn new(source: W, api_key: Option<String>) -> Self {
        Self { source, api_key }
    }

    /// Forecast sample nearest to `at_unix` at the given coordinates.
    ///
    /// `Ok(None)` means the provider answered but had no samples. A missing
    /// key fails before the source is called.
    pub async fn forecast_at(
        &self,
        lat: f64,
        lon: f64,
        at_unix: i64,
    ) -> Result<Option<ForecastSample>, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingCredential)?;

        let response = self.source.fetch_forecast(api_key, lat, lon).await?;
        let sample = nearest_sample(&response.list, at_unix).cloned();

        debug!(
            samples = response.list.len(),
            target = at_unix,
            selected = sample.as_ref().map(|s| s.dt),
            "selected forecast sample"
        );

        Ok(sample)
    }
}

/// The sample whose timestamp is closest to `target`.
///
/// Ties go to the sample that comes first.
pub fn nearest_sample(samples: &[ForecastSample], target: i64) -> Option<&ForecastSample> {
    samples.iter().min_by_key(|s| s.dt.abs_diff(target))
}
