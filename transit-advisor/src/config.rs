//! Process configuration.
//!
//! Credentials are read from the environment once, by the binary, and then
//! handed to each lookup component at construction. Nothing below this
//! module touches the process environment.

use std::net::SocketAddr;

/// Environment variable holding the Google Directions API key.
pub const DIRECTIONS_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable holding the OpenWeatherMap API key.
pub const WEATHER_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the listen address.
pub const BIND_ADDR_VAR: &str = "TRANSIT_ADVISOR_ADDR";

/// Default listen address.
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// One static API key per keyed provider.
///
/// `None` means the key is absent; lookups report that as a missing
/// credential rather than attempting an unauthenticated call.
#[derive(Clone, Default)]
pub struct Credentials {
    pub directions_api_key: Option<String>,
    pub weather_api_key: Option<String>,
}

impl Credentials {
    /// Create credentials with both keys set.
    pub fn new(directions_api_key: impl Into<String>, weather_api_key: impl Into<String>) -> Self {
        Self {
            directions_api_key: non_empty(directions_api_key.into()),
            weather_api_key: non_empty(weather_api_key.into()),
        }
    }

    /// Read both keys from the environment. Unset or empty variables
    /// become `None`.
    pub fn from_env() -> Self {
        Self {
            directions_api_key: env_key(DIRECTIONS_KEY_VAR),
            weather_api_key: env_key(WEATHER_KEY_VAR),
        }
    }

    /// Drop the directions key.
    pub fn without_directions_key(mut self) -> Self {
        self.directions_api_key = None;
        self
    }

    /// Drop the weather key.
    pub fn without_weather_key(mut self) -> Self {
        self.weather_api_key = None;
        self
    }
}

// Keys never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("directions_api_key", &self.directions_api_key.as_ref().map(|_| "<set>"))
            .field("weather_api_key", &self.weather_api_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub credentials: Credentials,
    pub bind_addr: SocketAddr,
}

impl AdvisorConfig {
    /// Load configuration from the environment.
    ///
    /// An unparseable `TRANSIT_ADVISOR_ADDR` is reported rather than
    /// silently replaced by the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match std::env::var(BIND_ADDR_VAR) {
            Ok(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidBindAddr {
                        value: raw.clone(),
                    })?
            }
            _ => SocketAddr::from(DEFAULT_BIND_ADDR),
        };

        Ok(Self {
            credentials: Credentials::from_env(),
            bind_addr,
        })
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TRANSIT_ADVISOR_ADDR: {value:?} is not a socket address")]
    InvalidBindAddr { value: String },
}

fn env_key(var: &str) -> Option<String> {
    std::env::var(var).ok().and_then(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
