//! Configuration, runtime paths and logging setup for the workforce client.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{
    Config, DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_MS, ENV_API_URL, ENV_LOG_LEVEL,
    ENV_TIMEOUT_MS,
};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, LogConfig};
pub use paths::Paths;
