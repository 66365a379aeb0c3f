//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /employees | GET | 员工列表 |
//! | /employees | POST | 新建员工 |
//! | /employees/{id} | GET | 员工详情 |
//! | /employees/{id} | PUT | 更新员工 |
//! | /employees/{id} | DELETE | 删除员工 |

mod handler;

use axum::{Router, routing::get};
use shared::models::EMPLOYEES_PATH;

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest(EMPLOYEES_PATH, routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
