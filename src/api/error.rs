/// Error types for upstream calls
use thiserror::Error;

/// Why an upstream search could not produce a usable payload.
///
/// These never reach the HTTP caller; the search proxy turns every variant
/// into the mock-catalog fallback.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, DNS, or TLS failure
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// Body was not JSON, or not shaped as `{ data: { items: [...] } }`
    #[error("Malformed upstream payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            UpstreamError::Status(status.as_u16())
        } else {
            UpstreamError::Network(e.to_string())
        }
    }
}

/// Startup failure while building the outbound HTTP client.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("Invalid upstream base URL for Referer header: {0}")]
    InvalidReferer(String),

    #[error("Failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
