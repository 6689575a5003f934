//! 日志系统
//!
//! Stdout belongs to the menu, so log records only ever go to a file.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 默认级别：依赖库 info，应用代码 debug
const DEFAULT_FILTER: &str = "info,gigbook=debug";

/// 构建 EnvFilter，优先使用参数指定的级别，其次使用 RUST_LOG 环境变量
pub fn build_filter(log_level: Option<&str>) -> Result<EnvFilter> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    Ok(filter)
}

/// 初始化日志系统
///
/// # Arguments
/// * `log_level` - 日志级别 (trace, debug, info, warn, error)，如果为 None 则使用环境变量 RUST_LOG
/// * `log_file` - 日志文件路径，父目录不存在时自动创建；文件以追加模式打开并在进程生命周期内保持打开
///
/// # Examples
/// ```no_run
/// use gigbook::utils::logger::init_logger;
/// use std::path::Path;
///
/// init_logger(Some("debug"), Path::new("/tmp/.gigbook/gigbook.log")).unwrap();
/// ```
pub fn init_logger(log_level: Option<&str>, log_file: &Path) -> Result<()> {
    let env_filter = build_filter(log_level)?;

    // 确保日志文件的父目录存在
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(false); // 文件中不使用 ANSI 颜色

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(log_file = %log_file.display(), "Logger initialized");
    Ok(())
}
