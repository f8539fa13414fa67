//! Error type for parsing operations vocabulary and feed payloads.

/// Failure converting external text into an `ops` value.
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
    #[error("unknown health status: {0}")]
    UnknownHealth(String),
    /// A feed frame that is not a valid deployment event.
    #[error("malformed deployment event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
}
