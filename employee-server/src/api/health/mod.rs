//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 服务及存储状态 | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "storage": { "backend": "memory", "status": "ok", "latency_ms": 0, "employees": 3 },
//!   "uptime_seconds": 42
//! }
//! ```

use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use shared::models::{HealthReport, STATUS_DEGRADED, STATUS_HEALTHY, StorageCheck};

use crate::core::ServerState;
use crate::utils::ErrorCode;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查
///
/// 总是返回 200；存储不可用时状态为 degraded，错误原因只写入日志
pub async fn health(State(state): State<ServerState>) -> Json<HealthReport> {
    let backend = state.employees.backend();

    // 通过计数探测存储
    let started = Instant::now();
    let storage = match state.employees.count().await {
        Ok(count) => StorageCheck::ok(backend, elapsed_ms(started), count),
        Err(e) => {
            tracing::warn!(backend, error = %e, "Storage health check failed");
            StorageCheck::error(
                backend,
                elapsed_ms(started),
                ErrorCode::DatabaseError.message(),
            )
        }
    };

    let status = if storage.is_ok() {
        STATUS_HEALTHY
    } else {
        STATUS_DEGRADED
    };

    Json(HealthReport {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        storage,
        uptime_seconds: state.uptime_seconds(),
    })
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
