//! Weather provider error types.

/// Errors from the weather lookup.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// No API key was configured; no request was made
    #[error("weather API key is not configured")]
    MissingCredential,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key
    #[error("unauthorized: check OPENWEATHER_API_KEY")]
    Unauthorized,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            WeatherError::MissingCredential.to_string(),
            "weather API key is not configured"
        );

        let err = WeatherError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");
    }
}
