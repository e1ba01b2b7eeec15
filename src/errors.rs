use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortlinkerError {
    DuplicateShortCode(String),
    NotFound(String),
    ExhaustedKeyspace(String),
    InvalidShortCode(String),
    Validation(String),
    Storage(String),
    Config(String),
}

impl ShortlinkerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortlinkerError::DuplicateShortCode(_) => "E001",
            ShortlinkerError::NotFound(_) => "E002",
            ShortlinkerError::ExhaustedKeyspace(_) => "E003",
            ShortlinkerError::InvalidShortCode(_) => "E004",
            ShortlinkerError::Validation(_) => "E005",
            ShortlinkerError::Storage(_) => "E006",
            ShortlinkerError::Config(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortlinkerError::DuplicateShortCode(_) => "Duplicate Short Code",
            ShortlinkerError::NotFound(_) => "Resource Not Found",
            ShortlinkerError::ExhaustedKeyspace(_) => "Keyspace Exhausted",
            ShortlinkerError::InvalidShortCode(_) => "Invalid Short Code",
            ShortlinkerError::Validation(_) => "Validation Error",
            ShortlinkerError::Storage(_) => "Storage Error",
            ShortlinkerError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortlinkerError::DuplicateShortCode(msg) => msg,
            ShortlinkerError::NotFound(msg) => msg,
            ShortlinkerError::ExhaustedKeyspace(msg) => msg,
            ShortlinkerError::InvalidShortCode(msg) => msg,
            ShortlinkerError::Validation(msg) => msg,
            ShortlinkerError::Storage(msg) => msg,
            ShortlinkerError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端日志）
    #[cfg(feature = "logging")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortlinkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortlinkerError {}

// 便捷的构造函数
impl ShortlinkerError {
    pub fn duplicate_short_code<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::DuplicateShortCode(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::NotFound(msg.into())
    }

    pub fn exhausted_keyspace<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::ExhaustedKeyspace(msg.into())
    }

    pub fn invalid_short_code<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::InvalidShortCode(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::Validation(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::Storage(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortlinkerError::Config(msg.into())
    }
}

impl From<config::ConfigError> for ShortlinkerError {
    fn from(err: config::ConfigError) -> Self {
        ShortlinkerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortlinkerError>;
