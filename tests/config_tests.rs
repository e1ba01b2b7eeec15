//! Configuration loading tests

use std::fs;

use shortlinker_core::ShortenerCore;
use shortlinker_core::config::StaticConfig;
use shortlinker_core::errors::ShortlinkerError;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[cfg(test)]
mod file_loading_tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StaticConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, StaticConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[shortener]
code_length = 8

[analytics]
default_location = "Earth"
"#,
        );

        let config = StaticConfig::load_from(&path).unwrap();
        assert_eq!(config.shortener.code_length, 8);
        assert_eq!(config.shortener.max_generate_attempts, 16);
        assert_eq!(config.analytics.default_location, "Earth");
        assert_eq!(config.analytics.default_referrer, "Direct");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_out_of_range_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[shortener]\ncode_length = 4\n");

        let err = StaticConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ShortlinkerError::Config(_)));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[shortener\ncode_length = ");

        assert!(matches!(
            StaticConfig::load_from(&path),
            Err(ShortlinkerError::Config(_))
        ));
    }
}

#[cfg(test)]
mod wiring_tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_code_length_is_used() {
        let mut config = StaticConfig::default();
        config.shortener.code_length = 9;

        let core = ShortenerCore::new(&config);
        let record = core
            .create_url("https://example.com", None, None)
            .await
            .unwrap();
        assert_eq!(record.short_code.len(), 9);
    }

    #[tokio::test]
    async fn test_configured_max_validity_is_enforced() {
        let mut config = StaticConfig::default();
        config.shortener.max_validity_minutes = 10;

        let core = ShortenerCore::new(&config);
        assert!(core.create_url("https://example.com", None, Some(10)).await.is_ok());
        assert!(matches!(
            core.create_url("https://example.com", None, Some(11)).await,
            Err(ShortlinkerError::Validation(_))
        ));
    }
}
