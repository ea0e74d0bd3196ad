//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑，将命令行参数转化为实际的服务调用。

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::info;

use quest_shared::config::AppConfig;
use quest_shared::database::Database;

use crate::cli::commands::parse_checkpoint;
use crate::error::XpError;
use crate::models::User;
use crate::repository::{
    AssertionRepository, CatalogRepository, InMemoryStore, MIGRATOR, SubmissionRepository,
    UserDirectory, UserRepository,
};
use crate::service::{NewBadgeService, TagXpAggregator, TagXpBreakdown};

/// 演示数据使用的标签
const DEMO_TAGS: [&str; 4] = ["math", "science", "art", "history"];

/// 命令执行器
///
/// 持有加载好的应用配置，按需建立数据库连接
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<Database> {
        Database::connect(&self.config.database)
            .await
            .context("failed to connect to database")
    }

    /// 执行 migrate 命令
    pub async fn run_migrate(&self) -> Result<()> {
        let db = self.connect().await?;
        db.run_migrations(&MIGRATOR).await?;
        db.close().await;
        Ok(())
    }

    /// 执行 total 命令
    pub async fn run_total(
        &self,
        user_id: i64,
        tags: &[String],
        semester: Option<i64>,
        json: bool,
    ) -> Result<()> {
        let db = self.connect().await?;
        let pool = db.pool().clone();

        let user = resolve_user(&UserRepository::new(pool.clone()), user_id).await?;

        let semester = semester.or(self.config.xp.active_semester_id);
        let aggregator = TagXpAggregator::new(
            Arc::new(SubmissionRepository::new(pool.clone()).with_active_semester(semester)),
            Arc::new(AssertionRepository::new(pool.clone())),
            Arc::new(CatalogRepository::new(pool)),
        );

        let breakdown = aggregator.xp_breakdown_by_tags(&user, tags).await?;
        db.close().await;

        if json {
            print_json(&breakdown)?;
        } else {
            print_breakdown(&user, tags, &breakdown);
        }
        Ok(())
    }

    /// 执行 new-badges 命令
    pub async fn run_new_badges(
        &self,
        user_id: i64,
        since: Option<&str>,
        json: bool,
    ) -> Result<()> {
        let last_checked = since.map(parse_checkpoint).transpose()?;

        let db = self.connect().await?;
        let pool = db.pool().clone();

        let user = resolve_user(&UserRepository::new(pool.clone()), user_id).await?;
        let service = NewBadgeService::new(Arc::new(AssertionRepository::new(pool)));
        let new_badges = service.badges_since(&user, last_checked, Utc::now()).await?;
        db.close().await;

        if json {
            print_json(&new_badges)?;
        } else {
            println!(
                "{}: {} new badge(s) {:?}",
                user.username,
                new_badges.badge_ids.len(),
                new_badges.badge_ids
            );
            println!("checkpoint: {}", new_badges.checkpoint.to_rfc3339());
        }
        Ok(())
    }

    /// 执行 demo 命令
    pub async fn run_demo(&self, seed: u64, quests: usize, badges: usize) -> Result<()> {
        info!(seed, quests, badges, "Seeding in-memory store");

        let store = Arc::new(InMemoryStore::new());
        let user = seed_demo_store(&store, seed, quests, badges);
        let aggregator = TagXpAggregator::new(store.clone(), store.clone(), store.clone());

        for tag in DEMO_TAGS {
            let breakdown = aggregator.xp_breakdown_by_tags(&user, &[tag]).await?;
            print_breakdown(&user, &[tag], &breakdown);
        }

        let all = aggregator.xp_breakdown_by_tags(&user, &DEMO_TAGS).await?;
        print_breakdown(&user, &DEMO_TAGS, &all);
        Ok(())
    }
}

/// 解析用户，不存在时返回 `UserNotFound`
pub async fn resolve_user<D: UserDirectory>(directory: &D, user_id: i64) -> crate::Result<User> {
    directory
        .find_user(user_id)
        .await?
        .ok_or(XpError::UserNotFound(user_id))
}

/// 填充演示数据
///
/// 每个任务/徽章随机带一到两个标签，XP 取 [0, 100]；
/// 每第五个任务的提交未审批，不计入 XP
pub fn seed_demo_store(store: &InMemoryStore, seed: u64, quests: usize, badges: usize) -> User {
    let mut rng = StdRng::seed_from_u64(seed);
    let user = store.add_user("demo-student", false);

    for i in 0..quests {
        let quest = store.add_quest(&format!("Quest {}", i + 1), rng.random_range(0..=100));
        for tag in random_tags(&mut rng) {
            store.tag_quest(quest.id, tag);
        }
        let approved = (i + 1) % 5 != 0;
        store.submit_quest(&user, quest.id, true, approved, None);
    }

    for i in 0..badges {
        let badge = store.add_badge(&format!("Badge {}", i + 1), rng.random_range(0..=100));
        for tag in random_tags(&mut rng) {
            store.tag_badge(badge.id, tag);
        }
        store.grant_badge(&user, badge.id, Utc::now());
    }

    user
}

fn random_tags(rng: &mut StdRng) -> Vec<&'static str> {
    let count = rng.random_range(1..=2);
    (0..count)
        .map(|_| DEMO_TAGS[rng.random_range(0..DEMO_TAGS.len())])
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_breakdown<T: AsRef<str>>(user: &User, tags: &[T], breakdown: &TagXpBreakdown) {
    let labels: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
    println!(
        "{} [{}]: total={} (quests={} from {} quest(s), badges={} from {} badge(s))",
        user.username,
        labels.join(", "),
        breakdown.total_xp,
        breakdown.quest_xp,
        breakdown.quest_ids.len(),
        breakdown.badge_xp,
        breakdown.badge_ids.len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_demo_store_is_deterministic() {
        let first = InMemoryStore::new();
        let second = InMemoryStore::new();
        seed_demo_store(&first, 7, 6, 3);
        seed_demo_store(&second, 7, 6, 3);

        assert_eq!(first.quest_count(), 6);
        assert_eq!(first.badge_count(), 3);
        assert_eq!(second.quest_count(), 6);
    }

    #[tokio::test]
    async fn test_demo_totals_match_between_runs() {
        let store = Arc::new(InMemoryStore::new());
        let user = seed_demo_store(&store, 11, 10, 5);
        let aggregator = TagXpAggregator::new(store.clone(), store.clone(), store.clone());
        let a = aggregator.total_xp_by_tags(&user, &DEMO_TAGS).await.unwrap();

        let other = Arc::new(InMemoryStore::new());
        let other_user = seed_demo_store(&other, 11, 10, 5);
        let aggregator = TagXpAggregator::new(other.clone(), other.clone(), other.clone());
        let b = aggregator
            .total_xp_by_tags(&other_user, &DEMO_TAGS)
            .await
            .unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_resolve_user_not_found() {
        let store = InMemoryStore::new();
        let err = resolve_user(&store, 404).await.unwrap_err();
        assert_eq!(err.error_code(), "USER_NOT_FOUND");

        let user = store.add_user("frank", false);
        assert_eq!(resolve_user(&store, user.id).await.unwrap(), user);
    }
}
