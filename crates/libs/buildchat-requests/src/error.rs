//! Transport error types.

/// Errors raised while talking to the webhook.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The endpoint could not be parsed as a URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Connection, TLS, timeout or body read failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
