//! OpenWeatherMap forecast DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from the `/forecast` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Forecast samples in provider order. Missing means none.
    #[serde(default)]
    pub list: Vec<ForecastSample>,
}

/// One timestamped forecast step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForecastSample {
    /// Forecast time, Unix seconds (UTC).
    pub dt: i64,

    /// Probability of precipitation, 0.0 to 1.0.
    #[serde(default)]
    pub pop: f64,

    /// Temperature, wind, cloud cover and the rest, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ForecastSample {
    pub fn new(dt: i64, pop: f64) -> Self {
        Self {
            dt,
            pop,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_forecast() {
        let json = r#"{
            "cod": "200",
            "cnt": 2,
            "list": [
                {"dt": 1700000000, "pop": 0.2, "main": {"temp": 11.4}},
                {"dt": 1700010800, "main": {"temp": 10.9}}
            ]
        }"#;

        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.list.len(), 2);
        assert_eq!(response.list[0].dt, 1_700_000_000);
        assert!((response.list[0].pop - 0.2).abs() < f64::EPSILON);
        assert!(response.list[0].extra.contains_key("main"));
        assert_eq!(response.list[1].pop, 0.0);
    }

    #[test]
    fn missing_list_is_empty() {
        let response: ForecastResponse = serde_json::from_str(r#"{"cod": "200"}"#).unwrap();
        assert!(response.list.is_empty());
    }
}
