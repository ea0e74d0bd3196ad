//! 统一可观测性模块
//!
//! 提供 logging 与 metrics 的统一初始化。
//! 所有服务通过单一入口点配置可观测性，确保一致的日志格式和指标命名。

pub mod metrics;
pub mod tracing;

use ::tracing::info;

use crate::config::ObservabilityConfig;
use crate::error::Result;

/// 统一初始化可观测性
///
/// 初始化顺序：
/// 1. Tracing（日志）
/// 2. Metrics（指标描述注册）
///
/// # Example
///
/// ```ignore
/// use quest_shared::{config::AppConfig, observability};
///
/// let config = AppConfig::load("quest-xp")?;
/// observability::init(&config.observability.clone().with_service_name("quest-xp"))?;
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;
    metrics::describe_metrics();

    info!(
        service = %config.service_name,
        log_format = %config.log_format,
        "Observability initialized"
    );

    Ok(())
}
