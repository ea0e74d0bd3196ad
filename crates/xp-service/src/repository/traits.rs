//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{BadgeAssertion, EntityKind, TaggedXp, User};

/// 任务提交仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// 用户已完成且已审批的提交所对应的任务 ID（可能重复）
    async fn completed_approved_quest_ids(&self, user: &User) -> Result<Vec<i64>>;
}

/// 徽章授予仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssertionStore: Send + Sync {
    /// 用户所有授予记录对应的徽章 ID（可能重复）
    async fn asserted_badge_ids(&self, user: &User) -> Result<Vec<i64>>;

    /// 指定时间（含）之后的授予记录，按授予时间升序
    async fn assertions_since(
        &self,
        user: &User,
        since: DateTime<Utc>,
    ) -> Result<Vec<BadgeAssertion>>;
}

/// 标签目录接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaggableCatalog: Send + Sync {
    /// 指定类型中标签集合与 `tags` 有交集的实体，按 ID 去重
    async fn entities_with_any_tag(&self, kind: EntityKind, tags: &[String])
    -> Result<Vec<TaggedXp>>;
}

/// 用户目录接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, user_id: i64) -> Result<Option<User>>;
}
