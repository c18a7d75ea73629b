//! Application state for the web layer.

use std::sync::Arc;

use crate::advisor::Advisor;
use crate::directions::DirectionsClient;
use crate::disruptions::DisruptionClient;
use crate::weather::WeatherClient;

/// The advisor wired to the real provider clients.
pub type LiveAdvisor = Advisor<DisruptionClient, DirectionsClient, WeatherClient>;

/// Shared application state.
///
/// Holds only immutable clients, so concurrent requests share nothing
/// mutable.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<LiveAdvisor>,
}

impl AppState {
    pub fn new(advisor: LiveAdvisor) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }
}
