//! 命令行接口
//!
//! - `commands`: clap 命令定义
//! - `runner`: 命令执行器

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
