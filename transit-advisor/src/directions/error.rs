//! Directions client error types.

/// Errors from the directions provider.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP succeeded but the provider reported a failure in the body,
    /// e.g. `REQUEST_DENIED` or `OVER_QUERY_LIMIT`
    #[error("directions request failed with status {status}{}", detail(.message))]
    Status {
        status: String,
        message: Option<String>,
    },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectionsError::Status {
            status: "REQUEST_DENIED".into(),
            message: Some("The provided API key is invalid.".into()),
        };
        assert_eq!(
            err.to_string(),
            "directions request failed with status REQUEST_DENIED: The provided API key is invalid."
        );

        let err = DirectionsError::Status {
            status: "UNKNOWN_ERROR".into(),
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "directions request failed with status UNKNOWN_ERROR"
        );
    }
}
