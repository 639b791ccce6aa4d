use thiserror::Error;

/// The single downstream error of the connection service. Every internal
/// failure reaches the caller as one of these; the Display message always
/// embeds the underlying cause so it can be surfaced as-is.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The HTTP round trip itself failed (connect, TLS, timeout).
    #[error("connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be interpreted as a resource listing.
    #[error("could not parse resource listing: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured API coordinates do not form a valid URL.
    #[error("invalid workspace API URL: {0}")]
    Url(#[from] url::ParseError),
}
