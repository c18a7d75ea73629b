//! Data transfer objects for tool requests and responses.

use serde::{Deserialize, Serialize};

use crate::disruptions::DisruptionRecord;
use crate::weather::ForecastSample;

/// Message when the provider had no forecast samples.
pub const NO_FORECAST: &str = "No forecast data available for this location and time.";

/// Query for the weather tool.
#[derive(Debug, Deserialize)]
pub struct WeatherToolRequest {
    pub lat: f64,
    pub lon: f64,
    /// Target instant, Unix seconds
    pub at: i64,
}

/// Response of the disruption tool.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DisruptionToolResponse {
    /// Possibly empty list of every reported disruption
    Records(Vec<DisruptionRecord>),
    Failed { error: String },
}

/// Response of the weather tool.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WeatherToolResponse {
    Forecast { forecast: ForecastSample },
    Empty { message: &'static str },
    Failed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn disruption_response_shapes() {
        let empty = serde_json::to_value(DisruptionToolResponse::Records(Vec::new())).unwrap();
        assert_eq!(empty, json!([]));

        let failed = serde_json::to_value(DisruptionToolResponse::Failed {
            error: "HTTP error".into(),
        })
        .unwrap();
        assert_eq!(failed, json!({"error": "HTTP error"}));
    }

    #[test]
    fn weather_response_shapes() {
        let forecast = serde_json::to_value(WeatherToolResponse::Forecast {
            forecast: ForecastSample::new(200, 0.25),
        })
        .unwrap();
        assert_eq!(forecast, json!({"forecast": {"dt": 200, "pop": 0.25}}));

        let empty = serde_json::to_value(WeatherToolResponse::Empty {
            message: NO_FORECAST,
        })
        .unwrap();
        assert_eq!(empty, json!({"message": NO_FORECAST}));
    }
}
