//! OpenWeatherMap forecast lookup.
//!
//! The provider returns a multi-step forecast series (3-hour steps over
//! five days). We only ever want the one sample closest to a given
//! instant, typically the predicted arrival time of a journey.

mod client;
mod error;
mod lookup;
mod types;

pub use client::{WeatherClient, WeatherClientConfig};
pub use error::WeatherError;
pub use lookup::{WeatherLookup, nearest_sample};
pub use types::{ForecastResponse, ForecastSample};

/// Anything that can produce a forecast series for a location.
pub trait WeatherSource {
    /// Fetch the full forecast series at the given coordinates.
    fn fetch_forecast(
        &self,
        api_key: &str,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<ForecastResponse, WeatherError>> + Send;
}

impl<T: WeatherSource + ?Sized> WeatherSource for &T {
    fn fetch_forecast(
        &self,
        api_key: &str,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<ForecastResponse, WeatherError>> + Send {
        (**self).fetch_forecast(api_key, lat, lon)
    }
}
