//! 徽章授予仓储

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use super::traits::AssertionStore;
use crate::error::Result;
use crate::models::{BadgeAssertion, User};

/// 徽章授予仓储
pub struct AssertionRepository {
    pool: PgPool,
}

impl AssertionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssertionStore for AssertionRepository {
    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn asserted_badge_ids(&self, user: &User) -> Result<Vec<i64>> {
        let badge_ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT badge_id
            FROM badge_assertions
            WHERE user_id = $1
            "#,
        )
        .bind(user.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(badge_ids)
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn assertions_since(
        &self,
        user: &User,
        since: DateTime<Utc>,
    ) -> Result<Vec<BadgeAssertion>> {
        let assertions = sqlx::query_as::<_, BadgeAssertion>(
            r#"
            SELECT id, badge_id, user_id, asserted_at, semester_id
            FROM badge_assertions
            WHERE user_id = $1 AND asserted_at >= $2
            ORDER BY asserted_at ASC, id ASC
            "#,
        )
        .bind(user.id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(assertions)
    }
}
