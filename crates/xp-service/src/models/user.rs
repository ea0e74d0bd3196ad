//! 用户实体

use serde::{Deserialize, Serialize};

/// 已解析的用户
///
/// 服务层只接收已存在的用户，查找失败由 `UserDirectory` 调用方处理
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
}

impl User {
    pub fn student(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            is_staff: false,
        }
    }
}
