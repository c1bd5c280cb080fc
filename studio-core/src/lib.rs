//! Studio Core - 健身课程预约的业务核心
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite 存储 (sqlx)，迁移与仓储函数
//! - **服务** (`services`): 登录/注册、课程表、预约切换、课程名单
//! - **会话** (`session`): 登录后得到的显式会话
//! - **核心** (`core`): 配置与应用状态
//!
//! # 模块结构
//!
//! ```text
//! studio-core/src/
//! ├── core/          # 配置、状态
//! ├── db/            # 连接池、仓储
//! ├── services/      # 业务服务
//! ├── session.rs     # 会话
//! └── utils/         # 错误映射、日志、校验
//! ```

pub mod core;
pub mod db;
pub mod services;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, StudioState};
pub use services::{
    ClassRoster, IdentityService, ReservationService, ReservationState, ScheduleCell,
    ScheduleGrid, ScheduleService,
};
pub use session::Session;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
