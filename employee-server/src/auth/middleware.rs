//! 认证中间件
//!
//! 为 `/employees` 路由提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::extractor::authenticate;
use crate::core::ServerState;

/// 认证中间件 - 要求 Bearer 令牌
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT。
/// 验证成功后将 [`CurrentUser`](crate::auth::CurrentUser) 注入请求扩展。
///
/// 通过 `route_layer` 挂载，只作用于受保护的路由；`/health` 不经过此中间件。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let user = authenticate(&state.jwt_service, auth_header, req.uri().path())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
