use tempfile::tempdir;
use workforce_config::{init_logging, Config, Paths};

#[test]
fn load_without_file_uses_defaults_and_validates() {
    let dir = tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().join("missing"));

    let config = Config::load(&paths).unwrap();
    assert!(config.request_timeout_ms > 0);
    assert!(config.api_base_url().is_ok());
}

#[test]
fn load_rejects_invalid_file_values() {
    let dir = tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().to_path_buf());
    std::fs::write(
        paths.config_file(),
        r#"{"api_base_url": "mailto:hr@example.com"}"#,
    )
    .unwrap();

    assert!(Config::load(&paths).is_err());
}

#[test]
fn logging_writes_jsonl_under_logs_dir() {
    let dir = tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().to_path_buf());

    assert!(init_logging("workforce-test", "debug", &paths));
    tracing::info!(auth_token = "abc", "config test line");

    let content = std::fs::read_to_string(paths.log_file()).unwrap();
    let line = content
        .lines()
        .find(|l| l.contains("config test line"))
        .expect("log line written");
    let entry: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(entry["service"], "workforce-test");
    assert_eq!(entry["fields"]["auth_token"], "[REDACTED]");
}
