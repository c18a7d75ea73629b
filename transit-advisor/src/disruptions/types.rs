//! Disruption feed DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire value for a conveyance that is out of service.
const OUT_OF_ORDER: &str = "out_of_order";

/// One reported conveyance disruption at a station.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisruptionRecord {
    /// Station name as the operator spells it, e.g. "Amsterdam Centraal".
    pub station_name: String,

    /// Kind of equipment, e.g. "lift" or "escalator".
    pub conveyance_type: String,

    pub status: DisruptionStatus,

    /// Feed fields we pass through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DisruptionRecord {
    /// Create a record with no extra fields.
    pub fn new(
        station_name: impl Into<String>,
        conveyance_type: impl Into<String>,
        status: DisruptionStatus,
    ) -> Self {
        Self {
            station_name: station_name.into(),
            conveyance_type: conveyance_type.into(),
            status,
            extra: Map::new(),
        }
    }

    /// Whether the equipment is actually unusable.
    pub fn is_out_of_order(&self) -> bool {
        self.status.is_out_of_order()
    }

    /// Case-insensitive substring match of `query` against the station name.
    pub fn station_matches(&self, query: &str) -> bool {
        self.station_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Conveyance status, kept exactly as the feed spelled it.
///
/// Only `out_of_order` (in any casing) is actionable. Every other value
/// still shows up in the disruption tool output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DisruptionStatus(String);

impl DisruptionStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn out_of_order() -> Self {
        Self::new(OUT_OF_ORDER)
    }

    pub fn is_out_of_order(&self) -> bool {
        self.0.eq_ignore_ascii_case(OUT_OF_ORDER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
