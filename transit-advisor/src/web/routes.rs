//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use tracing::{info, warn};

use crate::advisor::{RouteOutcome, RouteQuery};
use crate::disruptions::DisruptionSource;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools/disruptions", get(disruptions_tool))
        .route("/tools/weather", get(weather_tool))
        .route("/tools/route", get(route_tool))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current lift and escalator disruptions.
async fn disruptions_tool(State(state): State<AppState>) -> Json<DisruptionToolResponse> {
    let response = match state.advisor.disruptions().fetch_disruptions().await {
        Ok(records) => DisruptionToolResponse::Records(records),
        Err(e) => {
            warn!(error = %e, "disruption tool failed");
            DisruptionToolResponse::Failed {
                error: e.to_string(),
            }
        }
    };
    Json(response)
}

/// Forecast sample nearest a point in time.
async fn weather_tool(
    State(state): State<AppState>,
    Query(req): Query<WeatherToolRequest>,
) -> Json<WeatherToolResponse> {
    let response = match state.advisor.weather().forecast_at(req.lat, req.lon, req.at).await {
        Ok(Some(forecast)) => WeatherToolResponse::Forecast { forecast },
        Ok(None) => WeatherToolResponse::Empty {
            message: NO_FORECAST,
        },
        Err(e) => {
            warn!(error = %e, "weather tool failed");
            WeatherToolResponse::Failed {
                error: e.to_string(),
            }
        }
    };
    Json(response)
}

/// Enriched transit route.
async fn route_tool(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Json<RouteOutcome> {
    let outcome = state.advisor.lookup_route(&query).await;

    match &outcome {
        RouteOutcome::Found(plan) => info!(
            routes = plan.routes.len(),
            warnings = plan.warnings.len(),
            fallback = plan.notice.is_some(),
            "route found"
        ),
        RouteOutcome::NoRoutes { message } => info!(%message, "no route"),
        RouteOutcome::Failed(e) => warn!(error = %e, "route lookup failed"),
    }

    Json(outcome)
}
