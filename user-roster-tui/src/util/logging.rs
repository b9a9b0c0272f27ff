//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入文件。
//! 库代码通过 `log` 门面输出，由 tracing-subscriber 统一收集。

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "user-roster.log";

/// 默认日志目录：`<data dir>/user-roster`
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-roster")
}

/// 不滚动的日志文件，目录不存在时自动创建
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)?;
    Ok(appender)
}

/// 初始化日志（`RUST_LOG` 控制级别，默认 info）
///
/// 返回的 guard 必须保留到程序结束，drop 时会刷新缓冲区
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(dir)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn appender_creates_directory_and_fixed_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("user-roster");

        let mut appender = file_appender(&dir).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(content, "hello\n");
    }
}
