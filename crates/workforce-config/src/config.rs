//! Configuration for the workforce client.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use url::Url;

/// Default API base URL (can be overridden at compile time via WORKFORCE_API_URL env var).
pub const DEFAULT_API_URL: &str = match option_env!("WORKFORCE_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Uniform per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_LOG_LEVEL: &str = "WORKFORCE_LOG_LEVEL";
pub const ENV_API_URL: &str = "WORKFORCE_API_URL";
pub const ENV_TIMEOUT_MS: &str = "WORKFORCE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Base address every API path is resolved against.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api_base_url: default_api_base_url(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load from `paths.config_file()` (defaults if absent), then apply
    /// environment overrides.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        debug!(
            path = %config_path.display(),
            api_base_url = %config.api_base_url,
            timeout_ms = config.request_timeout_ms,
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.config_file(), content)?;
        Ok(())
    }

    /// Apply overrides from `lookup`; blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(url) = get(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_MS) {
            self.request_timeout_ms = raw.parse().map_err(|_| {
                CoreError::Config(format!("{} must be a whole number of milliseconds", ENV_TIMEOUT_MS))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> CoreResult<()> {
        let url = self.api_base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "api_base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(CoreError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn api_base_url(&self) -> CoreResult<Url> {
        Url::parse(&self.api_base_url).map_err(CoreError::from)
    }
}
