//! Route lookup with fallback to "now".

use tracing::{debug, warn};

use crate::directions::{DirectionsError, DirectionsRequest, DirectionsSource, Route};

use super::departure::parse_departure;
use super::outcome::{RouteError, RouteOutcome, RoutePlan, RouteQuery};

/// Notice attached to routes found by the fallback query.
pub const FALLBACK_NOTICE: &str =
    "No routes found for the requested departure time. Showing routes departing now instead.";

/// Message when neither the requested time nor "now" has routes.
pub const NO_ROUTES_EITHER: &str =
    "No routes found for the requested departure time or for departing now.";

/// Message when the single "now" query has no routes.
pub const NO_ROUTES: &str = "No routes found.";

/// How one directions query went.
enum Attempt {
    Routes(Vec<Route>),
    Empty,
    Failed(DirectionsError),
}

/// Route lookup component: a directions source plus the key to use with it.
#[derive(Clone)]
pub struct RouteLookup<R> {
    source: R,
    api_key: Option<String>,
}

impl<R: DirectionsSource> RouteLookup<R> {
    pub fn new(source: R, api_key: Option<String>) -> Self {
        Self { source, api_key }
    }

    /// Find transit routes for the query, without enrichment.
    ///
    /// If a departure time was given and nothing comes back for it, the
    /// query is repeated once for "now".
    pub async fn plan(&self, query: &RouteQuery) -> RouteOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return RouteOutcome::Failed(RouteError::MissingCredential);
        };

        let departure = match query.departure_time.as_deref().map(parse_departure) {
            None => None,
            Some(Ok(t)) => Some(t),
            Some(Err(e)) => return RouteOutcome::Failed(e),
        };

        let first = self.attempt(api_key, query, departure).await;

        match (first, departure) {
            (Attempt::Routes(routes), _) => RouteOutcome::Found(RoutePlan::new(routes)),
            (Attempt::Empty, None) => RouteOutcome::NoRoutes {
                message: NO_ROUTES.to_string(),
            },
            (Attempt::Failed(e), None) => RouteOutcome::Failed(e.into()),
            (_, Some(requested)) => {
                debug!(requested, "no routes at requested time, retrying for now");
                match self.attempt(api_key, query, None).await {
                    Attempt::Routes(routes) => {
                        RouteOutcome::Found(RoutePlan::new(routes).with_notice(FALLBACK_NOTICE))
                    }
                    Attempt::Empty => RouteOutcome::NoRoutes {
                        message: NO_ROUTES_EITHER.to_string(),
                    },
                    Attempt::Failed(e) => RouteOutcome::Failed(e.into()),
                }
            }
        }
    }

    /// One transit query, anchored at `departure` if given.
    async fn attempt(&self, api_key: &str, query: &RouteQuery, departure: Option<i64>) -> Attempt {
        let request = DirectionsRequest {
            origin: &query.origin,
            destination: &query.destination,
            api_key,
            departure_time: departure,
        };

        match self
            .source
            .fetch_routes(&request)
            .await
            .and_then(|response| response.into_routes())
        {
            Ok(routes) if routes.is_empty() => Attempt::Empty,
            Ok(routes) => {
                debug!(count = routes.len(), departure = ?departure, "directions returned routes");
                Attempt::Routes(routes)
            }
            Err(e) => {
                warn!(error = %e, departure = ?departure, "directions query failed");
                Attempt::Failed(e)
            }
        }
    }
}
