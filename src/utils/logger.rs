//! Tracing setup: a daily-rolling file under the configured log directory plus
//! a compact stderr stream.

use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, fmt::time::UtcTime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::error::{AppError, AppResult};

// Dropping the guard stops the background file writer.
static FILE_WRITER_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

const DEFAULT_LOG_DIRECTIVES: &str = "warn,app::db=info,app::checkin=debug";
const LOG_FILE_PREFIX: &str = "habit-tracker.log";

/// Installs the global subscriber once. Later calls return `Ok` without
/// touching the existing setup. `RUST_LOG` overrides the default directives.
pub fn init_logging(log_dir: &Path) -> AppResult<()> {
    FILE_WRITER_GUARD
        .get_or_try_init(|| install_subscriber(log_dir))
        .map(|_| ())
}

fn install_subscriber(log_dir: &Path) -> AppResult<WorkerGuard> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        AppError::config(format!("无法创建日志目录 {}: {err}", log_dir.display()))
    })?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339());
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|err| AppError::config(format!("安装日志订阅器失败: {err}")))?;

    Ok(guard)
}

fn log_filter() -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES)
        .map_err(|err| AppError::config(format!("解析日志级别失败: {err}")))
}
