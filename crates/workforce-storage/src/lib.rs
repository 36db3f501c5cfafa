//! Key-value storage for the workforce client.
//!
//! Two stores back the session: a plain one for non-sensitive records and a
//! secure one for the bearer credential. Both implement [`KeyValueStore`]:
//! - [`MemoryStore`]: process-local, for ephemeral sessions and tests
//! - [`FileStore`]: JSON file, with an owner-only secure variant

mod file;
mod keys;
mod memory;
mod traits;
mod vault;

pub use file::FileStore;
pub use keys::StorageKeys;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use vault::SessionVault;

use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific failure
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Vault over in-memory stores.
pub fn memory_vault() -> SessionVault {
    SessionVault::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
}
