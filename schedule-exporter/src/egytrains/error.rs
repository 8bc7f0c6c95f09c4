//! egytrains client error types.

/// Errors that can occur when fetching a station's schedule document.
///
/// Any of these makes one station's document unusable; callers treat
/// the document as absent and move on rather than aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum EgytrainsError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The configured base URL is unusable
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}
