//! 服务层
//!
//! 实现 XP 聚合与新徽章检查，协调各仓储接口。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `tag_xp`: 按标签聚合 XP（只读操作）
//! - `new_badge_service`: 自上次检查以来新获得的徽章

pub mod dto;
pub mod new_badge_service;
pub mod tag_xp;

pub use dto::*;
pub use new_badge_service::NewBadgeService;
pub use tag_xp::TagXpAggregator;
