//! High-level API for the persisted session.

use crate::{KeyValueStore, StorageError, StorageKeys, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Session persistence split across two stores: the credential goes to the
/// secure store, the user record to the plain one.
pub struct SessionVault {
    plain: Box<dyn KeyValueStore>,
    secure: Box<dyn KeyValueStore>,
}

impl SessionVault {
    /// Create a vault over the given plain and secure stores
    pub fn new(plain: Box<dyn KeyValueStore>, secure: Box<dyn KeyValueStore>) -> Self {
        Self { plain, secure }
    }

    // ==========================================
    // Credential
    // ==========================================

    pub fn set_token(&self, token: &str) -> StorageResult<()> {
        self.secure.set(StorageKeys::AUTH_TOKEN, token)
    }

    pub fn token(&self) -> StorageResult<Option<String>> {
        self.secure.get(StorageKeys::AUTH_TOKEN)
    }

    // ==========================================
    // User record
    // ==========================================

    /// Store the user record as JSON
    pub fn set_user<U: Serialize>(&self, user: &U) -> StorageResult<()> {
        let json =
            serde_json::to_string(user).map_err(|e| StorageError::Encoding(e.to_string()))?;
        self.plain.set(StorageKeys::AUTH_USER, &json)
    }

    /// Retrieve the user record.
    ///
    /// A record that no longer matches the expected shape is an encoding error,
    /// not a missing user.
    pub fn user<U: DeserializeOwned>(&self) -> StorageResult<Option<U>> {
        match self.plain.get(StorageKeys::AUTH_USER)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StorageError::Encoding(format!("stored user: {}", e))),
            None => Ok(None),
        }
    }

    // ==========================================
    // Whole session
    // ==========================================

    /// Both halves of the session are present
    pub fn has_complete_session(&self) -> StorageResult<bool> {
        Ok(self.secure.has(StorageKeys::AUTH_TOKEN)? && self.plain.has(StorageKeys::AUTH_USER)?)
    }

    /// Remove both halves of the session
    pub fn clear(&self) -> StorageResult<()> {
        let had_token = self.secure.delete(StorageKeys::AUTH_TOKEN)?;
        let had_user = self.plain.delete(StorageKeys::AUTH_USER)?;
        tracing::debug!(had_token, had_user, "Cleared persisted session");
        Ok(())
    }
}
