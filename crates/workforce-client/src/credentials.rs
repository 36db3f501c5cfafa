//! Credential lookup performed before every request.

use async_trait::async_trait;
use parking_lot::RwLock;

/// Source of the bearer credential attached to outbound requests.
///
/// The client asks on every call and never caches the answer, so a logout or
/// re-login is visible to the very next request.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Current credential, or `None` to send the request unauthenticated.
    async fn credential(&self) -> Option<String>;
}

/// In-memory credential holder, for callers that manage the token themselves.
#[derive(Debug, Default)]
pub struct StaticCredential {
    token: RwLock<Option<String>>,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn replace(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}

#[async_trait]
impl CredentialSource for StaticCredential {
    async fn credential(&self) -> Option<String> {
        self.token.read().clone()
    }
}
