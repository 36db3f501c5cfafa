//! Storage key constants.

/// Storage keys used by the session vault
pub struct StorageKeys;

impl StorageKeys {
    /// Bearer credential (secure store)
    pub const AUTH_TOKEN: &'static str = "auth_token";

    /// Signed-in user record as JSON (plain store)
    pub const AUTH_USER: &'static str = "auth_user";
}
