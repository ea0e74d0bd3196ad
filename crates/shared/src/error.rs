//! 统一错误处理模块
//!
//! 定义基础设施层（配置加载、数据库连接、可观测性初始化）共享的错误类型。

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum PlatformError {
    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    // ==================== 数据库错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("数据库迁移失败: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    // ==================== 可观测性错误 ====================
    #[error("日志初始化失败: {0}")]
    Observability(String),

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, PlatformError>;

impl PlatformError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Migration(_) => "MIGRATION_ERROR",
            Self::Observability(_) => "OBSERVABILITY_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为可重试错误
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = PlatformError::Internal("boom".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(
            PlatformError::Observability("x".to_string()).code(),
            "OBSERVABILITY_ERROR"
        );
    }

    #[test]
    fn test_is_retryable() {
        let db_err = PlatformError::Database(sqlx::Error::PoolTimedOut);
        assert!(db_err.is_retryable());

        let internal = PlatformError::Internal("boom".to_string());
        assert!(!internal.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = PlatformError::Internal("pool closed".to_string());
        assert!(err.to_string().contains("pool closed"));
    }
}
