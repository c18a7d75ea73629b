//! Route enrichment.
//!
//! The advisor answers one question for the agent: "how do I get from A
//! to B, and is there anything I should know?" It runs the route lookup
//! and, only if that produced an itinerary, checks for broken lifts and
//! escalators at either end and for rain at the destination around the
//! arrival time.
//!
//! A run is strictly linear:
//!
//! ```text
//! Start -> RouteQueried -> NoRoute
//!                       -> RouteFound -> DisruptionChecked -> WeatherChecked -> Done
//! ```
//!
//! Enrichment is best effort. A failed disruption or weather check becomes a
//! warning on the result, never an error. Warnings are collected locally and
//! only leave in the returned value, so dropping the future mid-run surfaces
//! nothing.

mod departure;
mod enrich;
mod outcome;
mod route;


use tracing::{debug, info};

use crate::config::Credentials;
use crate::directions::DirectionsSource;
use crate::disruptions::DisruptionSource;
use crate::weather::{WeatherLookup, WeatherSource};

pub use departure::parse_departure;
pub use enrich::{RAIN_THRESHOLD, disruption_warnings, rain_warning};
pub use outcome::{RouteError, RouteOutcome, RoutePlan, RouteQuery};
pub use route::{FALLBACK_NOTICE, NO_ROUTES, NO_ROUTES_EITHER, RouteLookup};

/// Route lookup plus disruption and weather enrichment.
#[derive(Clone)]
pub struct Advisor<D, R, W> {
    routes: RouteLookup<R>,
    disruptions: D,
    weather: WeatherLookup<W>,
}

impl<D, R, W> Advisor<D, R, W>
where
    D: DisruptionSource,
    R: DirectionsSource,
    W: WeatherSource,
{
    /// Assemble an advisor from ready-made components.
    pub fn new(routes: RouteLookup<R>, disruptions: D, weather: WeatherLookup<W>) -> Self {
        Self {
            routes,
            disruptions,
            weather,
        }
    }

    /// Assemble an advisor from raw sources and the configured keys.
    pub fn from_sources(
        directions: R,
        disruptions: D,
        weather: W,
        credentials: &Credentials,
    ) -> Self {
        Self::new(
            RouteLookup::new(directions, credentials.directions_api_key.clone()),
            disruptions,
            WeatherLookup::new(weather, credentials.weather_api_key.clone()),
        )
    }

    /// The disruption source, for serving the raw disruption list.
    pub fn disruptions(&self) -> &D {
        &self.disruptions
    }

    /// The weather lookup, for serving point forecasts.
    pub fn weather(&self) -> &WeatherLookup<W> {
        &self.weather
    }

    /// Look up routes for the query and annotate the first itinerary's
    /// journey with warnings.
    ///
    /// Outcomes without an itinerary are returned exactly as the route
    /// lookup produced them, and no other provider is called.
    pub async fn lookup_route(&self, query: &RouteQuery) -> RouteOutcome {
        let mut plan = match self.routes.plan(query).await {
            RouteOutcome::Found(plan) => plan,
            other => {
                debug!(
                    origin = %query.origin,
                    destination = %query.destination,
                    "no route, skipping enrichment"
                );
                return other;
            }
        };

        let arrival = plan.routes.first().and_then(|route| route.arrival_point());
        let mut warnings = Vec::new();

        match self.disruptions.fetch_disruptions().await {
            Ok(records) => {
                warnings.extend(disruption_warnings(
                    &records,
                    &query.origin,
                    &query.destination,
                ));
            }
            Err(e) => {
                info!(error = %e, "disruption check failed");
                warnings.push(enrich::disruption_failure_warning(&e));
            }
        }
        debug!(warnings = warnings.len(), "disruptions checked");

        match arrival {
            None => warnings.push(enrich::weather_unavailable_warning()),
            Some(point) => match self
                .weather
                .forecast_at(point.lat, point.lng, point.at_unix)
                .await
            {
                Ok(Some(sample)) => warnings.extend(rain_warning(sample.pop)),
                Ok(None) => debug!("no forecast sample near arrival"),
                Err(e) => {
                    info!(error = %e, "weather check failed");
                    warnings.push(enrich::weather_failure_warning(&e));
                }
            },
        }
        debug!(warnings = warnings.len(), "weather checked");

        plan.warnings = warnings;
        RouteOutcome::Found(plan)
    }
}
