//! 认证模块
//!
//! 验证外部身份提供方签发的 Bearer 令牌：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前调用方上下文
//! - [`require_auth`] - 认证中间件

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
