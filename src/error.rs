use thiserror::Error;

/// A unified error type for this library.
///
/// The client performs no error translation of its own: network and
/// protocol failures surface here exactly as `reqwest` produced them,
/// and a non-2xx response is not an error at all (the `Response` is
/// handed back untouched).
#[derive(Debug, Error)]
pub enum DccError {
    /// HTTP request failed (network or protocol issue).
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// Serde (de)serialization error, e.g. from `RequestOptions::with_json`.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    // Other
    #[error("Other error: {0}")]
    Other(String),
}
