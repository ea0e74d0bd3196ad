//! 新徽章检查服务
//!
//! 返回用户自上次检查时间点以来新获得的徽章。检查时间点由调用方显式保存和传入，
//! 服务本身不持有任何会话状态。

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use quest_shared::observability::metrics;

use crate::error::Result;
use crate::models::User;
use crate::repository::AssertionStore;
use crate::service::dto::NewBadges;

/// 新徽章检查服务
pub struct NewBadgeService<A>
where
    A: AssertionStore,
{
    assertion_store: Arc<A>,
}

impl<A> NewBadgeService<A>
where
    A: AssertionStore,
{
    pub fn new(assertion_store: Arc<A>) -> Self {
        Self { assertion_store }
    }

    /// 自 `last_checked` 以来新获得的徽章
    ///
    /// - `last_checked` 为空表示首次检查，只建立时间点，不返回任何徽章
    /// - 教职员工不参与新徽章提示
    /// - 同一徽章多次授予只返回一次，按首次授予时间排序
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn badges_since(
        &self,
        user: &User,
        last_checked: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<NewBadges> {
        let Some(since) = last_checked else {
            debug!("No checkpoint yet, starting a new one");
            return Ok(NewBadges::none(now));
        };

        if user.is_staff {
            return Ok(NewBadges::none(now));
        }

        let assertions = self.assertion_store.assertions_since(user, since).await?;

        let mut seen = HashSet::new();
        let badge_ids: Vec<i64> = assertions
            .into_iter()
            .map(|a| a.badge_id)
            .filter(|id| seen.insert(*id))
            .collect();

        metrics::record_new_badge_check(badge_ids.len());
        debug!(count = badge_ids.len(), "Checked for new badges");

        Ok(NewBadges {
            badge_ids,
            checkpoint: now,
        })
    }
}
