//! 核心模块 - 配置与应用状态
//!
//! - [`Config`] - 环境变量 / CLI 配置
//! - [`StudioState`] - 数据库连接与服务入口

pub mod config;
pub mod state;

pub use config::Config;
pub use state::StudioState;
