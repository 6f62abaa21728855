//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型 (from shared::error)
//! - [`validation`] - 员工输入校验
//! - [`time`] - 日期工具
//! - [`logger`] - 日志初始化

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use validation::{FieldErrors, parse_create, parse_update};
