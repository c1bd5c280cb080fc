//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`AppResult`] (from `shared::error`) and the
//!   repository error mapping
//! - Logging setup
//! - Input validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
