//! Logging initialization.

use crate::Paths;

pub use observability::LogConfig;

/// Install structured logging for `service_name`.
///
/// JSONL goes to `~/.workforce/logs/workforce.jsonl`; `RUST_LOG` overrides
/// `level`. Returns false when logging was already initialized.
pub fn init_logging(service_name: &str, level: &str, paths: &Paths) -> bool {
    observability::init_with_config(LogConfig {
        service_name: service_name.into(),
        default_level: level.into(),
        log_path: Some(paths.log_file()),
        also_stderr: false,
    })
}
