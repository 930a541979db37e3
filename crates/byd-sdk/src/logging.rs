//! 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt 输出（stderr），过滤规则取自 `RUST_LOG`
//! （未设置时为 [`DEFAULT_FILTER`]），并把 `log` crate 的记录桥接到 `tracing`。
//! stdout 留给命令行工具的数据输出。

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// `RUST_LOG` 未设置时的过滤规则：只放行本工作区 crate 的 info 及以上
pub const DEFAULT_FILTER: &str =
    "byd_sdk=info,byd_protocol=info,byd_carstate=info,byd_control=info,byd_cli=info";

/// 日志初始化错误
#[derive(Error, Debug)]
pub enum LogInitError {
    /// 已有全局 subscriber
    #[error("Global tracing subscriber already set: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// `log` 桥接已安装
    #[error("log bridge already installed: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),

    /// 缺省过滤规则无法解析
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),
}

/// 构建过滤器：优先 `RUST_LOG`，否则 [`DEFAULT_FILTER`]
pub fn env_filter() -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
}

/// 安装全局日志，失败时返回错误
pub fn try_init_logger() -> Result<(), LogInitError> {
    let filter = env_filter()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    Ok(())
}

/// 安装全局日志（重复调用无副作用）
pub fn init_logger() {
    // 测试中多次调用时后续调用会失败，忽略即可
    let _ = try_init_logger();
}
