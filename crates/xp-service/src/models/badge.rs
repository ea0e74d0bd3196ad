//! 徽章相关实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 徽章
///
/// 独立于任务流程授予，授予时获得 `xp` 经验值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub xp: i32,
}

/// 徽章授予记录
///
/// 记录存在即代表徽章已授予，没有额外的完成或审批状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BadgeAssertion {
    pub id: i64,
    pub badge_id: i64,
    pub user_id: i64,
    pub asserted_at: DateTime<Utc>,
    #[sqlx(default)]
    pub semester_id: Option<i64>,
}
