//! 内存存储
//!
//! 使用 DashMap 实现的内存存储，同时实现所有仓储接口，适用于测试和演示环境。

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::traits::{AssertionStore, SubmissionStore, TaggableCatalog, UserDirectory};
use crate::error::Result;
use crate::models::{
    Badge, BadgeAssertion, EntityKind, Quest, QuestSubmission, TaggedXp, User,
};

/// 内存存储
///
/// 任务、徽章、标签关联、提交记录与授予记录都保存在各自的 DashMap 中，
/// ID 由单个原子计数器分配，跨实体类型唯一
#[derive(Debug, Default)]
pub struct InMemoryStore {
    next_id: AtomicI64,
    active_semester_id: Option<i64>,
    users: DashMap<i64, User>,
    quests: DashMap<i64, Quest>,
    badges: DashMap<i64, Badge>,
    quest_tags: DashMap<i64, HashSet<String>>,
    badge_tags: DashMap<i64, HashSet<String>>,
    submissions: DashMap<i64, QuestSubmission>,
    assertions: DashMap<i64, BadgeAssertion>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只统计指定学期的提交
    pub fn with_active_semester(mut self, semester_id: Option<i64>) -> Self {
        self.active_semester_id = semester_id;
        self
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    // ==================== 写入操作 ====================

    pub fn add_user(&self, username: &str, is_staff: bool) -> User {
        let user = User {
            id: self.allocate_id(),
            username: username.to_string(),
            is_staff,
        };
        self.users.insert(user.id, user.clone());
        user
    }

    pub fn add_quest(&self, name: &str, xp: i32) -> Quest {
        let quest = Quest {
            id: self.allocate_id(),
            name: name.to_string(),
            xp,
        };
        self.quests.insert(quest.id, quest.clone());
        quest
    }

    pub fn add_badge(&self, name: &str, xp: i32) -> Badge {
        let badge = Badge {
            id: self.allocate_id(),
            name: name.to_string(),
            xp,
        };
        self.badges.insert(badge.id, badge.clone());
        badge
    }

    /// 给任务打标签，重复添加同一标签无效果
    pub fn tag_quest(&self, quest_id: i64, tag: &str) {
        self.quest_tags
            .entry(quest_id)
            .or_default()
            .insert(tag.to_string());
    }

    /// 给徽章打标签，重复添加同一标签无效果
    pub fn tag_badge(&self, badge_id: i64, tag: &str) {
        self.badge_tags
            .entry(badge_id)
            .or_default()
            .insert(tag.to_string());
    }

    /// 记录一次任务提交
    pub fn submit_quest(
        &self,
        user: &User,
        quest_id: i64,
        is_completed: bool,
        is_approved: bool,
        semester_id: Option<i64>,
    ) -> QuestSubmission {
        let submission = QuestSubmission {
            id: self.allocate_id(),
            quest_id,
            user_id: user.id,
            is_completed,
            is_approved,
            semester_id,
            time_completed: is_completed.then(Utc::now),
        };
        self.submissions.insert(submission.id, submission.clone());
        submission
    }

    /// 记录一次已完成且已审批的任务提交
    pub fn complete_quest(&self, user: &User, quest_id: i64) -> QuestSubmission {
        self.submit_quest(user, quest_id, true, true, None)
    }

    /// 授予徽章
    pub fn grant_badge(
        &self,
        user: &User,
        badge_id: i64,
        asserted_at: DateTime<Utc>,
    ) -> BadgeAssertion {
        let assertion = BadgeAssertion {
            id: self.allocate_id(),
            badge_id,
            user_id: user.id,
            asserted_at,
            semester_id: None,
        };
        self.assertions.insert(assertion.id, assertion.clone());
        assertion
    }

    // ==================== 查询辅助 ====================

    pub fn quest_count(&self) -> usize {
        self.quests.len()
    }

    pub fn badge_count(&self) -> usize {
        self.badges.len()
    }

    fn tagged(
        xp_by_id: impl Iterator<Item = (i64, i32)>,
        tags_by_id: &DashMap<i64, HashSet<String>>,
        tags: &[String],
    ) -> Vec<TaggedXp> {
        // BTreeMap 按 ID 去重并保证输出顺序稳定
        xp_by_id
            .filter(|(id, _)| {
                tags_by_id
                    .get(id)
                    .is_some_and(|labels| tags.iter().any(|t| labels.contains(t)))
            })
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .map(|(id, xp)| TaggedXp { id, xp })
            .collect()
    }
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn completed_approved_quest_ids(&self, user: &User) -> Result<Vec<i64>> {
        Ok(self
            .submissions
            .iter()
            .filter(|s| {
                s.user_id == user.id
                    && s.counts_toward_xp()
                    && s.in_semester(self.active_semester_id)
            })
            .map(|s| s.quest_id)
            .collect())
    }
}

#[async_trait]
impl AssertionStore for InMemoryStore {
    async fn asserted_badge_ids(&self, user: &User) -> Result<Vec<i64>> {
        Ok(self
            .assertions
            .iter()
            .filter(|a| a.user_id == user.id)
            .map(|a| a.badge_id)
            .collect())
    }

    async fn assertions_since(
        &self,
        user: &User,
        since: DateTime<Utc>,
    ) -> Result<Vec<BadgeAssertion>> {
        let mut assertions: Vec<BadgeAssertion> = self
            .assertions
            .iter()
            .filter(|a| a.user_id == user.id && a.asserted_at >= since)
            .map(|a| a.value().clone())
            .collect();
        assertions.sort_by_key(|a| (a.asserted_at, a.id));
        Ok(assertions)
    }
}

#[async_trait]
impl TaggableCatalog for InMemoryStore {
    async fn entities_with_any_tag(
        &self,
        kind: EntityKind,
        tags: &[String],
    ) -> Result<Vec<TaggedXp>> {
        let entities = match kind {
            EntityKind::Quest => Self::tagged(
                self.quests.iter().map(|q| (q.id, q.xp)),
                &self.quest_tags,
                tags,
            ),
            EntityKind::Badge => Self::tagged(
                self.badges.iter().map(|b| (b.id, b.xp)),
                &self.badge_tags,
                tags,
            ),
        };
        Ok(entities)
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_user(&self, user_id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&user_id).map(|u| u.value().clone()))
    }
}
