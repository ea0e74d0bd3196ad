//! XP 服务错误类型
//!
//! 定义服务层的业务错误和系统错误

use thiserror::Error;

/// XP 服务错误类型
#[derive(Debug, Error)]
pub enum XpError {
    // === 用户相关错误 ===
    #[error("用户不存在: {0}")]
    UserNotFound(i64),

    // === 系统错误 ===
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON 序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("参数校验失败: {0}")]
    Validation(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// XP 服务 Result 类型别名
pub type Result<T> = std::result::Result<T, XpError>;

impl XpError {
    /// 检查是否为可重试的错误
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::Validation(_))
    }

    /// 获取错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        assert!(XpError::Database(sqlx::Error::PoolTimedOut).is_retryable());
        assert!(!XpError::UserNotFound(1).is_retryable());
        assert!(!XpError::Validation("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_is_business_error() {
        assert!(XpError::UserNotFound(1).is_business_error());
        assert!(XpError::Validation("bad".to_string()).is_business_error());
        assert!(!XpError::Internal("panic".to_string()).is_business_error());
        assert!(!XpError::Database(sqlx::Error::PoolClosed).is_business_error());
    }

    #[test]
    fn test_error_code() {
        assert_eq!(XpError::UserNotFound(7).error_code(), "USER_NOT_FOUND");
        assert_eq!(
            XpError::Validation("since".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert!(XpError::UserNotFound(7).to_string().contains('7'));
    }
}
