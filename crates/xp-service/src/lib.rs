//! 任务 XP 服务
//!
//! 按标签统计学生从任务和徽章中获得的 XP。
//!
//! ## 核心功能
//!
//! - **标签 XP 聚合**：统计带有任一指定标签的已完成任务与已获徽章的 XP 总和
//! - **新徽章检查**：根据调用方保存的检查时间点返回新获得的徽章
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 仓储接口及 PostgreSQL / 内存实现
//! - `service`: 业务服务层
//! - `cli`: 命令行接口

pub mod cli;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Result, XpError};
pub use models::*;
pub use repository::{
    AssertionRepository, AssertionStore, CatalogRepository, InMemoryStore, SubmissionRepository,
    SubmissionStore, TaggableCatalog, UserDirectory, UserRepository,
};
pub use service::{NewBadgeService, NewBadges, TagXpAggregator, TagXpBreakdown};
