//! Normalized error type for every call made through [`crate::ApiClient`].
//!
//! Whatever goes wrong (server rejection, lost connectivity, a request that
//! could not even be built) the caller receives one `ApiError` whose display
//! text can be shown to an end user as-is.

use thiserror::Error;

/// Message used when the server answered with an error but gave no `message`.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred";

/// Message used when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "No response from server. Please check your internet connection.";

/// Message used for local failures that carry no description of their own.
pub const CLIENT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// HTTP status the backend uses for an invalid or expired credential.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Machine-readable category of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server was reached and answered with a non-2xx status.
    Server { status: u16 },
    /// No response was received (connect failure, timeout, dropped connection).
    Network,
    /// The request could not be constructed, or another local fault occurred.
    Client,
    /// A 2xx response whose body did not match the expected schema.
    Decode,
}

/// Normalized API error with a display-ready message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApiError {
    /// Server-responded error. Falls back to [`SERVER_ERROR_MESSAGE`] when the
    /// body carried no usable message.
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string());
        Self {
            kind: ApiErrorKind::Server { status },
            message,
            source: None,
        }
    }

    /// No response received.
    pub fn network(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            source: Some(source.into()),
        }
    }

    /// Local construction or unexpected failure.
    pub fn client(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            CLIENT_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            kind: ApiErrorKind::Client,
            message,
            source: None,
        }
    }

    /// Response body did not decode into the expected type.
    pub fn decode(source: serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Unexpected response format: {}", source),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The error category.
    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// The display-ready message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Server { status } => Some(status),
            _ => None,
        }
    }

    /// True when the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED_STATUS)
    }

    /// True when no response was received.
    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }
}

impl From<reqwest::Error> for ApiError {
    /// Failures raised while dispatching: anything reqwest could not even build
    /// is local, everything else means no response came back.
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::client(err.to_string()).with_source(err)
        } else {
            ApiError::network(err)
        }
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
