//! 数据仓储层
//!
//! 提供 XP 聚合所需的只读数据访问接口。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据读取，不包含聚合逻辑
//! - PostgreSQL 实现使用 SQLx，查询按用户批量执行
//! - 内存实现用于测试和演示
//! - 定义 trait 接口以支持 mock 测试

mod assertion_repo;
mod catalog_repo;
mod memory_store;
mod submission_repo;
mod traits;
mod user_repo;

pub use assertion_repo::AssertionRepository;
pub use catalog_repo::CatalogRepository;
pub use memory_store::InMemoryStore;
pub use submission_repo::SubmissionRepository;
pub use traits::*;
pub use user_repo::UserRepository;

/// 内嵌的数据库迁移
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
