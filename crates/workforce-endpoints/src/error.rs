//! Endpoint error types.

use thiserror::Error;

/// Endpoint error type.
#[derive(Error, Debug)]
pub enum EndpointError {
    /// Submission failed a presence/format check; nothing was sent
    #[error("{0}")]
    Validation(String),

    /// API call failed; the message is display-ready
    #[error("{0}")]
    Api(#[from] workforce_client::ApiError),
}

impl EndpointError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        EndpointError::Validation(message.into())
    }

    /// True when the server rejected the credential used for the call.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, EndpointError::Api(e) if e.is_unauthorized())
    }
}

/// Result type alias using EndpointError.
pub type EndpointResult<T> = Result<T, EndpointError>;
