//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::error::{Result, XpError};

/// 任务 XP 命令行工具
#[derive(Parser, Debug)]
#[command(name = "quest-xp")]
#[command(version, about = "按标签统计任务与徽章 XP")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 应用数据库迁移
    Migrate,

    /// 统计用户在指定标签下的 XP
    Total {
        /// 用户 ID
        #[arg(short, long)]
        user_id: i64,

        /// 标签（可重复，任一匹配即计入）
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// 只统计指定学期的任务提交，覆盖配置文件
        #[arg(long)]
        semester: Option<i64>,

        /// 以 JSON 输出明细
        #[arg(long)]
        json: bool,
    },

    /// 列出自上次检查以来新获得的徽章
    NewBadges {
        /// 用户 ID
        #[arg(short, long)]
        user_id: i64,

        /// 上次检查时间（RFC 3339），为空表示首次检查
        #[arg(long)]
        since: Option<String>,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 使用内存数据演示按标签统计，无需数据库
    Demo {
        /// 随机种子
        #[arg(long, default_value = "9921622")]
        seed: u64,

        /// 任务数量
        #[arg(long, default_value = "20")]
        quests: usize,

        /// 徽章数量
        #[arg(long, default_value = "10")]
        badges: usize,
    },
}

/// 解析 RFC 3339 时间参数
pub fn parse_checkpoint(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| XpError::Validation(format!("无效的时间 '{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_total_with_repeated_tags() {
        let cli = Cli::try_parse_from([
            "quest-xp", "total", "--user-id", "5", "--tag", "math", "-t", "art", "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Total {
                user_id,
                tags,
                semester,
                json,
            } => {
                assert_eq!(user_id, 5);
                assert_eq!(tags, vec!["math", "art"]);
                assert_eq!(semester, None);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_checkpoint() {
        let dt = parse_checkpoint("2024-01-01T08:00:00+08:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let err = parse_checkpoint("yesterday").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
