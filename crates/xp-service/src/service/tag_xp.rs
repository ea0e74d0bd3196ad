//! 按标签聚合 XP
//!
//! 统计用户从带有指定标签（任一匹配）的任务和徽章中获得的 XP 总和。
//!
//! ## 计算规则
//!
//! - 任务：仅统计已完成且已审批的提交所对应的任务
//! - 徽章：统计用户所有的授予记录，不做额外过滤
//! - 同一任务/徽章无论命中多少个标签、被提交或授予多少次，都只计一次
//! - 标签精确匹配，区分大小写，不做任何规范化
//! - 标签为空时结果为 0

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use quest_shared::observability::metrics;

use crate::error::Result;
use crate::models::{EntityKind, TaggedXp, User};
use crate::repository::{AssertionStore, SubmissionStore, TaggableCatalog};
use crate::service::dto::TagXpBreakdown;

/// 按标签聚合 XP 的服务
///
/// 纯读取操作，不修改任何数据
pub struct TagXpAggregator<S, A, C>
where
    S: SubmissionStore,
    A: AssertionStore,
    C: TaggableCatalog,
{
    submission_store: Arc<S>,
    assertion_store: Arc<A>,
    catalog: Arc<C>,
}

impl<S, A, C> TagXpAggregator<S, A, C>
where
    S: SubmissionStore,
    A: AssertionStore,
    C: TaggableCatalog,
{
    pub fn new(submission_store: Arc<S>, assertion_store: Arc<A>, catalog: Arc<C>) -> Self {
        Self {
            submission_store,
            assertion_store,
            catalog,
        }
    }

    /// 用户在指定标签下获得的 XP 总和
    pub async fn total_xp_by_tags<T>(&self, user: &User, tags: &[T]) -> Result<i64>
    where
        T: AsRef<str>,
    {
        Ok(self.xp_breakdown_by_tags(user, tags).await?.total_xp)
    }

    /// 用户在指定标签下获得的 XP 明细
    #[instrument(skip(self, user, tags), fields(user_id = user.id, tag_count = tags.len()))]
    pub async fn xp_breakdown_by_tags<T>(&self, user: &User, tags: &[T]) -> Result<TagXpBreakdown>
    where
        T: AsRef<str>,
    {
        let labels = distinct_labels(tags);
        if labels.is_empty() {
            debug!("No tags given, nothing can match");
            return Ok(TagXpBreakdown::default());
        }

        let started = Instant::now();
        let result = self.aggregate(user, &labels).await;
        metrics::record_tag_xp_query(result.is_ok(), started.elapsed());

        let breakdown = result?;
        info!(
            user_id = user.id,
            quest_count = breakdown.quest_ids.len(),
            badge_count = breakdown.badge_ids.len(),
            total_xp = breakdown.total_xp,
            "Aggregated XP by tags"
        );

        Ok(breakdown)
    }

    async fn aggregate(&self, user: &User, labels: &[String]) -> Result<TagXpBreakdown> {
        let (quest_ids, badge_ids, tagged_quests, tagged_badges) = tokio::try_join!(
            self.submission_store.completed_approved_quest_ids(user),
            self.assertion_store.asserted_badge_ids(user),
            self.catalog.entities_with_any_tag(EntityKind::Quest, labels),
            self.catalog.entities_with_any_tag(EntityKind::Badge, labels),
        )?;

        let quests = reachable_xp(&quest_ids, tagged_quests);
        let badges = reachable_xp(&badge_ids, tagged_badges);

        Ok(TagXpBreakdown::from_matches(quests, badges))
    }
}

/// 标签去重，保持原样不做规范化
fn distinct_labels<T: AsRef<str>>(tags: &[T]) -> Vec<String> {
    tags.iter()
        .map(|t| t.as_ref().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 保留用户可达的带标签实体，按实体 ID 去重
fn reachable_xp(reachable_ids: &[i64], tagged: Vec<TaggedXp>) -> BTreeMap<i64, i32> {
    let reachable: HashSet<i64> = reachable_ids.iter().copied().collect();
    tagged
        .into_iter()
        .filter(|entity| reachable.contains(&entity.id))
        .map(|entity| (entity.id, entity.xp))
        .collect()
}
