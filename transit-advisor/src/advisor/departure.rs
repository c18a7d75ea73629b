//! Departure time parsing.

use chrono::{DateTime, NaiveDateTime};

use super::outcome::RouteError;

/// Offset-carrying formats that RFC 3339 rejects: no seconds, or a basic
/// `+hhmm` offset. `%z` also takes `+hh:mm`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Formats without an offset; these are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 departure time into Unix seconds.
///
/// A trailing `Z` is the same as `+00:00`. Times without any offset are
/// taken to be UTC.
pub fn parse_departure(input: &str) -> Result<i64, RouteError> {
    let trimmed = input.trim();

    // chrono's `%:z` does not accept `Z`.
    let normalized = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.timestamp());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Ok(dt.timestamp());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }

    Err(RouteError::MalformedDepartureTime {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-15T10:00:00Z
    const TEN_AM_UTC: i64 = 1_710_496_800;

    #[test]
    fn utc_designator_matches_zero_offset() {
        assert_eq!(parse_departure("2024-03-15T10:00:00Z").unwrap(), TEN_AM_UTC);
        assert_eq!(
            parse_departure("2024-03-15T10:00:00+00:00").unwrap(),
            TEN_AM_UTC
        );
    }

    #[test]
    fn numeric_offset() {
        assert_eq!(
            parse_departure("2024-03-15T11:00:00+01:00").unwrap(),
            TEN_AM_UTC
        );
        assert_eq!(parse_departure("2024-03-15T11:00+01:00").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15T11:00:00+0100").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15T09:30-0030").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15 11:00:00+0100").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15 11:00+01:00").unwrap(), TEN_AM_UTC);
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(
            parse_departure("2024-03-15T10:00:00.250Z").unwrap(),
            TEN_AM_UTC
        );
    }

    #[test]
    fn naive_is_utc() {
        assert_eq!(parse_departure("2024-03-15T10:00:00").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15T10:00").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure(" 2024-03-15T10:00Z ").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15 10:00:00").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15 10:00").unwrap(), TEN_AM_UTC);
        assert_eq!(parse_departure("2024-03-15 10:00:00.5").unwrap(), TEN_AM_UTC);
    }

    #[test]
    fn space_separator_agrees_with_t() {
        for (spaced, with_t) in [
            ("2024-03-15 10:00:00", "2024-03-15T10:00:00"),
            ("2024-03-15 10:00", "2024-03-15T10:00"),
            ("2024-03-15 10:00:00+00:00", "2024-03-15T10:00:00+00:00"),
            ("2024-03-15 10:00Z", "2024-03-15T10:00Z"),
        ] {
            assert_eq!(
                parse_departure(spaced).unwrap(),
                parse_departure(with_t).unwrap(),
                "{spaced:?}"
            );
        }
    }

    #[test]
    fn malformed_inputs() {
        for input in [
            "",
            "tomorrow at ten",
            "2024-13-15T10:00:00Z",
            "2024-03-15 25:00",
            "10:00",
            "Z",
        ] {
            assert!(
                matches!(
                    parse_departure(input),
                    Err(RouteError::MalformedDepartureTime { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }
}
