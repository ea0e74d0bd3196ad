//! 任务提交仓储

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::traits::SubmissionStore;
use crate::error::Result;
use crate::models::User;

/// 任务提交仓储
///
/// 可选地限定在当前学期内
pub struct SubmissionRepository {
    pool: PgPool,
    active_semester_id: Option<i64>,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            active_semester_id: None,
        }
    }

    /// 只统计指定学期的提交
    pub fn with_active_semester(mut self, semester_id: Option<i64>) -> Self {
        self.active_semester_id = semester_id;
        self
    }
}

#[async_trait]
impl SubmissionStore for SubmissionRepository {
    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn completed_approved_quest_ids(&self, user: &User) -> Result<Vec<i64>> {
        let quest_ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT quest_id
            FROM quest_submissions
            WHERE user_id = $1
              AND is_completed = TRUE
              AND is_approved = TRUE
              AND ($2::BIGINT IS NULL OR semester_id = $2)
            "#,
        )
        .bind(user.id)
        .bind(self.active_semester_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = quest_ids.len(), "Loaded completed submissions");
        Ok(quest_ids)
    }
}
