//! Disruption feed error types.

/// Errors from the disruption feed client.
#[derive(Debug, thiserror::Error)]
pub enum DisruptionError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Feed body was not a list of disruptions
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
