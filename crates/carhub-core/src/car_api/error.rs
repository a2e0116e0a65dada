//! Failure causes for a car data request.

use thiserror::Error;

/// Why a car data request produced no usable result.
///
/// Only [`super::CarApi::try_fetch_cars`] returns this; `fetch_cars` logs it
/// and hands back an empty list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, TLS, timeout).
    #[error("request failed: {0}")]
    Curl(#[from] curl::Error),
    /// Response body was not a JSON list of cars.
    #[error("HTTP {status}: response is not a car list: {source}")]
    Decode {
        status: u32,
        #[source]
        source: serde_json::Error,
    },
    /// The blocking transfer task panicked or was cancelled.
    #[error("request task: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl FetchError {
    /// True when no HTTP response was received at all.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Curl(_))
    }
}
