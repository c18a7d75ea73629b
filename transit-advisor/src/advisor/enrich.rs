//! Warning text for disruptions and weather.

use crate::disruptions::{DisruptionError, DisruptionRecord};

/// Precipitation probability above which we warn. Strictly greater.
pub const RAIN_THRESHOLD: f64 = 0.5;

/// Which end of the journey a disruption affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Origin,
    Destination,
}

impl End {
    fn label(self) -> &'static str {
        match self {
            End::Origin => "origin",
            End::Destination => "destination",
        }
    }
}

/// Warnings for out-of-order conveyances at the origin or destination.
///
/// A record can match both ends and then yields two warnings. Any status
/// other than out-of-order is ignored.
pub fn disruption_warnings(
    records: &[DisruptionRecord],
    origin: &str,
    destination: &str,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for record in records.iter().filter(|r| r.is_out_of_order()) {
        for (end, query) in [(End::Origin, origin), (End::Destination, destination)] {
            if record.station_matches(query) {
                warnings.push(format!(
                    "The {} at {} ({}) is out of order.",
                    record.conveyance_type,
                    record.station_name,
                    end.label()
                ));
            }
        }
    }

    warnings
}

pub fn disruption_failure_warning(err: &DisruptionError) -> String {
    format!("Could not check lift and escalator disruptions: {err}")
}

/// Rain warning for a precipitation probability, if it is high enough.
pub fn rain_warning(pop: f64) -> Option<String> {
    if pop > RAIN_THRESHOLD {
        let pct = (pop * 100.0).round();
        Some(format!(
            "{pct:.0}% chance of rain at the destination around your arrival time. \
             Bring an umbrella or rain protection."
        ))
    } else {
        None
    }
}

pub fn weather_failure_warning(reason: impl std::fmt::Display) -> String {
    format!("Could not check the weather forecast at the destination: {reason}")
}

/// Used when the route gives no place or time to check the weather for.
pub fn weather_unavailable_warning() -> String {
    weather_failure_warning("route has no arrival time")
}
