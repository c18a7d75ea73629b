use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use transit_advisor::advisor::Advisor;
use transit_advisor::config::{AdvisorConfig, DIRECTIONS_KEY_VAR, WEATHER_KEY_VAR};
use transit_advisor::directions::{DirectionsClient, DirectionsClientConfig};
use transit_advisor::disruptions::{DisruptionClient, DisruptionClientConfig};
use transit_advisor::weather::{WeatherClient, WeatherClientConfig};
use transit_advisor::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "transit_advisor=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AdvisorConfig::from_env()?;

    // Lookups report missing keys per request; just make it visible here.
    if config.credentials.directions_api_key.is_none() {
        warn!("{DIRECTIONS_KEY_VAR} not set. Route lookups will fail.");
    }
    if config.credentials.weather_api_key.is_none() {
        warn!("{WEATHER_KEY_VAR} not set. Weather checks will be skipped with a warning.");
    }

    let directions = DirectionsClient::new(DirectionsClientConfig::default())?;
    let disruptions = DisruptionClient::new(DisruptionClientConfig::default())?;
    let weather = WeatherClient::new(WeatherClientConfig::default())?;

    let advisor = Advisor::from_sources(directions, disruptions, weather, &config.credentials);
    let app = create_router(AppState::new(advisor));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Transit advisor listening on http://{}", config.bind_addr);
    info!("  GET /health");
    info!("  GET /tools/disruptions");
    info!("  GET /tools/weather?lat=&lon=&at=");
    info!("  GET /tools/route?origin=&destination=[&departure_time=]");

    axum::serve(listener, app).await?;
    Ok(())
}
