//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /employees | GET | 分页列表 (`department`, `page`, `page_size`) |
//! | /employees | POST | 创建 |
//! | /employees/avg_salary | GET | 各部门平均薪资 |
//! | /employees/search | GET | 按技能搜索 (`skill`) |
//! | /employees/{employee_id} | GET | 详情 |
//! | /employees/{employee_id} | PATCH / PUT | 部分更新 |
//! | /employees/{employee_id} | DELETE | 删除 |
//!
//! 所有路由都需要 `Authorization: Bearer <jwt>`。

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_auth;
use crate::core::ServerState;

/// Employee router
pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .nest("/employees", routes())
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

fn routes() -> Router<ServerState> {
    // 静态路径优先于 {employee_id} 捕获
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/avg_salary", get(handler::avg_salary))
        .route("/search", get(handler::search))
        .route(
            "/{employee_id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .put(handler::update)
                .delete(handler::delete),
        )
}

