//! Logging initialization test
//!
//! Lives in its own test binary because the global subscriber can only be
//! installed once per process.

#![cfg(feature = "logging")]

use shortlinker_core::config::LoggingConfig;
use shortlinker_core::system::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_init_logging_writes_to_file() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("core.log");

    let config = LoggingConfig {
        level: "info".to_string(),
        format: "json".to_string(),
        file: Some(log_path.to_string_lossy().into_owned()),
        max_backups: 1,
        enable_rotation: false,
    };

    let guard = init_logging(&config);
    tracing::info!("logging-smoke-test");
    tracing::debug!("filtered-out-debug");
    drop(guard);

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("logging-smoke-test"));
    assert!(!content.contains("filtered-out-debug"));
}
