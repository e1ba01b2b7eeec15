use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShortlinkerError};

/// Shortest short code accepted or generated
pub const MIN_CODE_LENGTH: usize = 6;
/// Longest short code accepted or generated
pub const MAX_CODE_LENGTH: usize = 10;

/// 静态配置（从 TOML 加载）
///
/// 包含：
/// - shortener: 短码生成与有效期限制
/// - analytics: 点击日志默认值
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 config.toml 和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SL，分隔符：__
    /// 示例：SL__SHORTENER__CODE_LENGTH=8
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// 从指定路径加载配置（文件可选）
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("SL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值范围
    pub fn validate(&self) -> Result<()> {
        let s = &self.shortener;
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&s.code_length) {
            return Err(ShortlinkerError::config(format!(
                "shortener.code_length must be between {} and {}, got {}",
                MIN_CODE_LENGTH, MAX_CODE_LENGTH, s.code_length
            )));
        }
        if s.max_generate_attempts == 0 {
            return Err(ShortlinkerError::config(
                "shortener.max_generate_attempts must be at least 1",
            ));
        }
        if s.max_validity_minutes <= 0 {
            return Err(ShortlinkerError::config(
                "shortener.max_validity_minutes must be positive",
            ));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

/// 短码生成配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenerConfig {
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    #[serde(default = "default_max_generate_attempts")]
    pub max_generate_attempts: u32,
    /// 30 天
    #[serde(default = "default_max_validity_minutes")]
    pub max_validity_minutes: i64,
}

/// 点击日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsConfig {
    /// 请求未带 Referer 时写入的值，空字符串表示不填充
    #[serde(default = "default_referrer")]
    pub default_referrer: String,
    /// 调用方未提供位置时写入的值，空字符串表示不填充
    #[serde(default = "default_location")]
    pub default_location: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_code_length() -> usize {
    MIN_CODE_LENGTH
}

fn default_max_generate_attempts() -> u32 {
    16
}

fn default_max_validity_minutes() -> i64 {
    43_200
}

fn default_referrer() -> String {
    "Direct".to_string()
}

fn default_location() -> String {
    "Unknown".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            max_generate_attempts: default_max_generate_attempts(),
            max_validity_minutes: default_max_validity_minutes(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_referrer: default_referrer(),
            default_location: default_location(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StaticConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shortener.code_length, 6);
        assert_eq!(config.analytics.default_referrer, "Direct");
    }

    #[test]
    fn test_validate_rejects_code_length_out_of_range() {
        let mut config = StaticConfig::default();
        config.shortener.code_length = 5;
        assert!(matches!(config.validate(), Err(ShortlinkerError::Config(_))));

        config.shortener.code_length = 11;
        assert!(config.validate().is_err());

        config.shortener.code_length = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = StaticConfig::default();
        config.shortener.max_generate_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_roundtrips_through_toml() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[shortener]"));
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}
