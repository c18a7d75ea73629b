//! Google Directions request and response DTOs.
//!
//! Fields use `Option` wherever the provider is known to omit them. Each
//! struct keeps the fields it does not model in `extra`, so serializing a
//! route back out gives the agent what the provider sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DirectionsError;

/// Provider statuses that mean "well-formed response, nothing found".
const EMPTY_STATUSES: [&str; 2] = ["ZERO_RESULTS", "NOT_FOUND"];

/// One transit directions query.
#[derive(Debug, Clone, Copy)]
pub struct DirectionsRequest<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub api_key: &'a str,
    /// Unix seconds; `None` lets the provider use "now".
    pub departure_time: Option<i64>,
}

impl DirectionsRequest<'_> {
    /// Query string parameters, in transit mode.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("origin", self.origin.to_string()),
            ("destination", self.destination.to_string()),
            ("mode", "transit".to_string()),
            ("key", self.api_key.to_string()),
        ];
        if let Some(t) = self.departure_time {
            pairs.push(("departure_time", t.to_string()));
        }
        pairs
    }
}

/// Top-level directions response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// A successful response carrying the given routes.
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            status: Some("OK".to_string()),
            error_message: None,
            routes,
        }
    }

    /// Routes from a usable response.
    ///
    /// An empty vector means the provider found nothing. Statuses other
    /// than `OK` and the "nothing found" ones are errors.
    pub fn into_routes(self) -> Result<Vec<Route>, DirectionsError> {
        match self.status.as_deref() {
            None | Some("OK") => Ok(self.routes),
            Some(s) if EMPTY_STATUSES.contains(&s) => Ok(Vec::new()),
            Some(s) => Err(DirectionsError::Status {
                status: s.to_string(),
                message: self.error_message,
            }),
        }
    }
}

/// One proposed itinerary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Route {
    /// Where and when the itinerary ends: the final leg's end location
    /// and arrival time.
    ///
    /// `None` if there are no legs or the final leg lacks either field.
    pub fn arrival_point(&self) -> Option<ArrivalPoint> {
        let leg = self.legs.last()?;
        let location = leg.end_location?;
        let arrival = leg.arrival_time.as_ref()?;
        Some(ArrivalPoint {
            lat: location.lat,
            lng: location.lng,
            at_unix: arrival.value,
        })
    }
}

/// One continuous segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Leg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<LatLng>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<LatLng>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,

    /// Only present for transit itineraries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<TimeValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<TimeValue>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A provider timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimeValue {
    /// Unix seconds.
    pub value: i64,

    /// Local time for display, e.g. "10:42am".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// End of an itinerary in space and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalPoint {
    pub lat: f64,
    pub lng: f64,
    pub at_unix: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_json() -> &'static str {
        r#"{
            "summary": "",
            "overview_polyline": {"points": "abc"},
            "legs": [{
                "start_address": "Amsterdam Centraal",
                "end_address": "Amstelveen",
                "start_location": {"lat": 52.3789, "lng": 4.9004},
                "end_location": {"lat": 52.3030, "lng": 4.8600},
                "departure_time": {"text": "10:02", "time_zone": "Europe/Amsterdam", "value": 1700000520},
                "arrival_time": {"text": "10:31", "time_zone": "Europe/Amsterdam", "value": 1700002260},
                "steps": []
            }]
        }"#
    }

    #[test]
    fn query_pairs_without_departure() {
        let request = DirectionsRequest {
            origin: "Centraal",
            destination: "Zuid",
            api_key: "k",
            departure_time: None,
        };
        let pairs = request.query_pairs();
        assert!(pairs.contains(&("mode", "transit".to_string())));
        assert!(pairs.contains(&("key", "k".to_string())));
        assert!(!pairs.iter().any(|(name, _)| *name == "departure_time"));
    }

    #[test]
    fn query_pairs_with_departure() {
        let request = DirectionsRequest {
            origin: "Centraal",
            destination: "Zuid",
            api_key: "k",
            departure_time: Some(1_700_000_000),
        };
        assert!(
            request
                .query_pairs()
                .contains(&("departure_time", "1700000000".to_string()))
        );
    }

    #[test]
    fn arrival_point_from_final_leg() {
        let route: Route = serde_json::from_str(route_json()).unwrap();
        let point = route.arrival_point().unwrap();
        assert_eq!(point.at_unix, 1_700_002_260);
        assert!((point.lat - 52.3030).abs() < 1e-9);
        assert!((point.lng - 4.8600).abs() < 1e-9);
    }

    #[test]
    fn arrival_point_needs_arrival_time() {
        let route: Route = serde_json::from_str(
            r#"{"legs": [{"end_location": {"lat": 1.0, "lng": 2.0}}]}"#,
        )
        .unwrap();
        assert!(route.arrival_point().is_none());

        let route: Route = serde_json::from_str(r#"{"legs": []}"#).unwrap();
        assert!(route.arrival_point().is_none());
    }

    #[test]
    fn unknown_fields_survive_serialization() {
        let route: Route = serde_json::from_str(route_json()).unwrap();
        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(value["overview_polyline"]["points"], "abc");
        assert_eq!(value["legs"][0]["steps"], Value::Array(vec![]));
        assert_eq!(value["legs"][0]["arrival_time"]["value"], 1_700_002_260);
    }

    #[test]
    fn status_classification() {
        let ok = DirectionsResponse {
            status: Some("OK".into()),
            error_message: None,
            routes: vec![serde_json::from_str(route_json()).unwrap()],
        };
        assert_eq!(ok.into_routes().unwrap().len(), 1);

        let zero = DirectionsResponse {
            status: Some("ZERO_RESULTS".into()),
            ..Default::default()
        };
        assert!(zero.into_routes().unwrap().is_empty());

        let denied = DirectionsResponse {
            status: Some("REQUEST_DENIED".into()),
            error_message: Some("bad key".into()),
            routes: Vec::new(),
        };
        assert!(matches!(
            denied.into_routes(),
            Err(DirectionsError::Status { status, .. }) if status == "REQUEST_DENIED"
        ));
    }
}
