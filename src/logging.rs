//! 日志初始化
//!
//! `RUST_LOG` 优先，否则使用配置中的级别

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 初始化全局 tracing subscriber
pub fn init_logging(config: &LogConfig) {
    let log_filter = format!(
        "{},wordtts={},tower_http=debug",
        config.level, config.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
