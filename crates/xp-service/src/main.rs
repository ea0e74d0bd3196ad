//! 任务 XP 命令行入口

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use quest_shared::{config::AppConfig, observability};
use quest_xp::cli::{Cli, CommandRunner, Commands};

const SERVICE_NAME: &str = "quest-xp";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 配置加载失败时使用默认配置，待日志初始化后再告警
    let (config, load_error) = match AppConfig::load(SERVICE_NAME) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let mut obs_config = config
        .observability
        .clone()
        .with_service_name(SERVICE_NAME);
    if let Some(level) = &cli.log_level {
        obs_config = obs_config.with_log_level(level);
    }
    observability::init(&obs_config)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }
    info!(environment = %config.environment, "Configuration loaded");

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Migrate => runner.run_migrate().await?,
        Commands::Total {
            user_id,
            tags,
            semester,
            json,
        } => runner.run_total(user_id, &tags, semester, json).await?,
        Commands::NewBadges {
            user_id,
            since,
            json,
        } => {
            runner
                .run_new_badges(user_id, since.as_deref(), json)
                .await?
        }
        Commands::Demo {
            seed,
            quests,
            badges,
        } => runner.run_demo(seed, quests, badges).await?,
    }

    Ok(())
}
