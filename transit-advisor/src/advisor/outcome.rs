//! Route query and result types.

use serde::{Deserialize, Serialize, Serializer};

use crate::directions::{DirectionsError, Route};

/// A transit request as the agent phrases it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteQuery {
    /// Free-text origin, e.g. "Amsterdam Centraal".
    pub origin: String,

    /// Free-text destination.
    pub destination: String,

    /// ISO-8601 departure time; absent means "now".
    #[serde(default)]
    pub departure_time: Option<String>,
}

impl RouteQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_time: None,
        }
    }

    /// Anchor the query to a departure time.
    pub fn departing_at(mut self, departure_time: impl Into<String>) -> Self {
        self.departure_time = Some(departure_time.into());
        self
    }
}

/// A found itinerary set plus everything learned while enriching it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Never empty.
    pub routes: Vec<Route>,

    /// Set when these routes came from the "now" fallback.
    pub notice: Option<String>,

    /// Human-readable warnings, in the order they were found.
    pub warnings: Vec<String>,
}

impl RoutePlan {
    pub(crate) fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            notice: None,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Errors that stop a route lookup outright.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// No directions API key; nothing was sent
    #[error("directions API key is not configured")]
    MissingCredential,

    /// Departure time was not ISO-8601; nothing was sent
    #[error("invalid departure time {input:?}: expected ISO-8601, e.g. 2024-03-15T10:00:00+01:00")]
    MalformedDepartureTime { input: String },

    /// Directions provider call failed
    #[error("directions lookup failed: {0}")]
    Upstream(#[from] DirectionsError),
}

/// Result of a route lookup. Exactly one shape at a time.
#[derive(Debug)]
pub enum RouteOutcome {
    /// At least one itinerary.
    Found(RoutePlan),

    /// The provider answered but had no itineraries.
    NoRoutes { message: String },

    /// The lookup could not be completed.
    Failed(RouteError),
}

impl RouteOutcome {
    /// The plan, if any itinerary was found.
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            RouteOutcome::Found(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Wire shape handed to the agent.
#[derive(Serialize)]
#[serde(untagged)]
enum OutcomeBody<'a> {
    Found {
        routes: &'a [Route],
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<&'a str>,
        #[serde(skip_serializing_if = "no_warnings")]
        warnings: &'a [String],
    },
    NoRoutes {
        message: &'a str,
    },
    Failed {
        error: String,
    },
}

fn no_warnings(warnings: &&[String]) -> bool {
    warnings.is_empty()
}

/// Serializes as `{"routes", "message"?, "warnings"?}`, `{"message"}` or
/// `{"error"}`.
impl Serialize for RouteOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            RouteOutcome::Found(plan) => OutcomeBody::Found {
                routes: &plan.routes,
                message: plan.notice.as_deref(),
                warnings: &plan.warnings,
            },
            RouteOutcome::NoRoutes { message } => OutcomeBody::NoRoutes { message },
            RouteOutcome::Failed(err) => OutcomeBody::Failed {
                error: err.to_string(),
            },
        };
        body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route() -> Route {
        serde_json::from_value(json!({"legs": []})).unwrap()
    }

    #[test]
    fn found_omits_empty_fields() {
        let outcome = RouteOutcome::Found(RoutePlan::new(vec![route()]));
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, json!({"routes": [{"legs": []}]}));
    }

    #[test]
    fn found_with_notice_and_warnings() {
        let mut plan = RoutePlan::new(vec![route()]).with_notice("fell back");
        plan.warnings.push("bring an umbrella".into());
        let value = serde_json::to_value(RouteOutcome::Found(plan)).unwrap();
        assert_eq!(value["message"], "fell back");
        assert_eq!(value["warnings"], json!(["bring an umbrella"]));
        assert_eq!(value["routes"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn no_routes_has_no_routes_key() {
        let outcome = RouteOutcome::NoRoutes {
            message: "No routes found.".into(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, json!({"message": "No routes found."}));
    }

    #[test]
    fn failure_is_an_error_string() {
        let outcome = RouteOutcome::Failed(RouteError::MissingCredential);
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({"error": "directions API key is not configured"})
        );
    }

    #[test]
    fn query_deserializes_without_departure() {
        let query: RouteQuery =
            serde_json::from_value(json!({"origin": "Centraal", "destination": "Zuid"})).unwrap();
        assert_eq!(query, RouteQuery::new("Centraal", "Zuid"));
    }
}
