//! Session error types.

use thiserror::Error;

/// Session error type.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Missing or malformed login input
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Login attempted while a session is active
    #[error("Already logged in")]
    AlreadyLoggedIn,

    /// Login response did not carry a usable session
    #[error("Invalid login response: {0}")]
    InvalidResponse(String),

    /// Invalid state transition in the session FSM
    #[error("Invalid session state transition: {0}")]
    InvalidStateTransition(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] workforce_storage::StorageError),

    /// API call failed; the message is display-ready
    #[error("{0}")]
    Api(#[from] workforce_client::ApiError),
}

impl SessionError {
    /// True when the server rejected the credential used for the call.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SessionError::Api(e) if e.is_unauthorized())
    }
}

/// Result type alias using SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
