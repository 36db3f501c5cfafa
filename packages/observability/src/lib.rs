//! # Observability
//!
//! Structured logging shared by the workforce crates.
//!
//! Crates only use `tracing` macros. The binary calls [`init_with_config`]
//! once at startup, which installs:
//!
//! - a JSON layer appending one object per line to
//!   `~/.workforce/logs/workforce.jsonl` (or [`LogConfig::log_path`])
//! - optional compact stderr output
//! - an `EnvFilter` built from `RUST_LOG`, falling back to the configured level
//!
//! Values of fields whose names look sensitive (`authorization`, `token`,
//! `password`, `secret`, `cookie`) are written as `[REDACTED]`.
//!
//! ```rust,ignore
//! observability::init_with_config(observability::LogConfig {
//!     service_name: "workforce-cli".into(),
//!     default_level: "debug".into(),
//!     ..Default::default()
//! });
//! tracing::info!("ready");
//! ```

mod json_layer;
mod redact;
mod writer;

pub use json_layer::{JsonLayer, LogEntry};
pub use writer::{LogFileWriter, WriterFactory};

use std::path::PathBuf;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Included in every log line.
    pub service_name: String,

    /// Default filter; `RUST_LOG` takes precedence.
    pub default_level: String,

    /// Defaults to `~/.workforce/logs/workforce.jsonl`.
    pub log_path: Option<PathBuf>,

    /// Also emit compact logs to stderr.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

impl LogConfig {
    fn resolved_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(default_log_path)
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".workforce").join("logs").join("workforce.jsonl"))
}

/// Initialize logging with defaults for `service_name`.
pub fn init(service_name: &str) -> bool {
    init_with_config(LogConfig {
        service_name: service_name.into(),
        ..Default::default()
    })
}

/// Initialize logging. Returns false if a global subscriber was already set;
/// never panics.
pub fn init_with_config(config: LogConfig) -> bool {
    writer::install(&config)
}

pub use tracing::{debug, error, info, instrument, trace, warn};
