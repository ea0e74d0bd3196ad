//! XP 服务领域模型
//!
//! 任务（Quest）与徽章（Badge）都带有 XP 和标签集合，
//! 用户通过任务提交（QuestSubmission）和徽章授予（BadgeAssertion）获得它们。

pub mod badge;
pub mod enums;
pub mod quest;
pub mod user;

// 重新导出常用类型
pub use badge::{Badge, BadgeAssertion};
pub use enums::EntityKind;
pub use quest::{Quest, QuestSubmission};
pub use user::User;

use serde::{Deserialize, Serialize};

/// 带 XP 的可打标签实体
///
/// 标签目录按实体类型返回的 (id, xp) 对
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaggedXp {
    pub id: i64,
    pub xp: i32,
}
