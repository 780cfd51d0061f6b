use thiserror::Error;

/// Failures at the boundary with the prospecting backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// True when the request never produced an HTTP response.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
