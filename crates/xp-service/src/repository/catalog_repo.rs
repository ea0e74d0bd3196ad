//! 标签目录仓储
//!
//! 通过 quest_tags / badge_tags 关联表解析带标签的实体

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::traits::TaggableCatalog;
use crate::error::Result;
use crate::models::{EntityKind, TaggedXp};

const QUESTS_WITH_ANY_TAG: &str = r#"
    SELECT DISTINCT q.id, q.xp
    FROM quests q
    JOIN quest_tags qt ON qt.quest_id = q.id
    JOIN tags t ON t.id = qt.tag_id
    WHERE t.name = ANY($1)
"#;

const BADGES_WITH_ANY_TAG: &str = r#"
    SELECT DISTINCT b.id, b.xp
    FROM badges b
    JOIN badge_tags bt ON bt.badge_id = b.id
    JOIN tags t ON t.id = bt.tag_id
    WHERE t.name = ANY($1)
"#;

/// 标签目录仓储
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaggableCatalog for CatalogRepository {
    #[instrument(skip(self, tags), fields(kind = %kind, tag_count = tags.len()))]
    async fn entities_with_any_tag(
        &self,
        kind: EntityKind,
        tags: &[String],
    ) -> Result<Vec<TaggedXp>> {
        if tags.is_empty() {
            return Ok(vec![]);
        }

        let sql = match kind {
            EntityKind::Quest => QUESTS_WITH_ANY_TAG,
            EntityKind::Badge => BADGES_WITH_ANY_TAG,
        };

        let entities = sqlx::query_as::<_, TaggedXp>(sql)
            .bind(tags)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = entities.len(), "Resolved tagged entities");
        Ok(entities)
    }
}
