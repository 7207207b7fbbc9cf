//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入 `<配置目录>/shortstack-tui/shortstack-tui.log`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "shortstack-tui.log";

/// 初始化文件日志
///
/// 返回的 [`WorkerGuard`] 必须保持到程序退出，drop 时刷新缓冲区。
/// `log` 宏的记录经 tracing-subscriber 自带的 log 桥接一并写入。
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(log_file = %dir.join(LOG_FILE_NAME).display(), "Logging initialized");
    Ok(guard)
}
