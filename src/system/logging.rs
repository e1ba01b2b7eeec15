//! Logging system initialization
//!
//! Sets up the tracing subscriber from [`LoggingConfig`]. The core itself
//! only emits `tracing` events; the embedding application decides whether
//! and where they are written.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

type BoxedWriter = Box<dyn Write + Send + Sync>;

/// 日志输出目标
#[derive(Debug, PartialEq)]
enum LogSink {
    Stdout,
    /// 追加写入单个文件
    File(PathBuf),
    /// 按天滚动，保留 `keep` 个历史文件
    Daily {
        dir: PathBuf,
        prefix: String,
        keep: usize,
    },
}

impl LogSink {
    fn from_config(config: &LoggingConfig) -> Self {
        let Some(file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
            return Self::Stdout;
        };
        let path = Path::new(file);
        if !config.enable_rotation {
            return Self::File(path.to_path_buf());
        }

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let prefix = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("shortlinker");
        Self::Daily {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            keep: config.max_backups.max(1) as usize,
        }
    }

    fn is_console(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    fn open(self) -> BoxedWriter {
        match self {
            Self::Stdout => Box::new(std::io::stdout()),
            Self::File(path) => Box::new(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .unwrap_or_else(|e| panic!("Failed to open log file {:?}: {}", path, e)),
            ),
            Self::Daily { dir, prefix, keep } => Box::new(
                rolling::Builder::new()
                    .rotation(rolling::Rotation::DAILY)
                    .filename_prefix(prefix)
                    .filename_suffix("log")
                    .max_log_files(keep)
                    .build(&dir)
                    .expect("Failed to create rolling log appender"),
            ),
        }
    }
}

/// Install the global subscriber described by `config`
///
/// Call once at startup. The returned guard flushes the background writer
/// when dropped, so keep it alive for as long as logs should be written.
///
/// # Panics
/// * If the log file or rolling appender cannot be opened
/// * If a global subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    let sink = LogSink::from_config(config);
    let ansi = sink.is_console();
    let (writer, guard) = tracing_appender::non_blocking(sink.open());

    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.level))
        .with_ansi(ansi);

    match config.format.as_str() {
        "json" => builder.json().init(),
        _ => builder.init(),
    }

    guard
}
